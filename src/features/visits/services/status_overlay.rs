use std::collections::HashMap;

use crate::features::developers::models::Developer;
use crate::features::visits::dtos::{DeveloperStatusDto, StatusMarker};
use crate::features::visits::models::DeveloperStatusRow;
use crate::shared::geo::parse_coord;

/// Merge the per-developer visit status onto the branch developer list.
///
/// Every developer of the branch produces one entry. Developers found in
/// the status rows get their traffic-light status and its color; the rest
/// are emitted unvisited with the default marker color. Status rows that
/// match no developer are dropped.
pub fn overlay_status(
    developers: &[Developer],
    rows: &[DeveloperStatusRow],
) -> Vec<DeveloperStatusDto> {
    let by_name: HashMap<&str, &DeveloperStatusRow> = rows
        .iter()
        .map(|row| (row.nama_developer.as_str(), row))
        .collect();

    developers
        .iter()
        .map(|dev| {
            let row = by_name.get(dev.nama_developer.as_str());
            let status = row.and_then(|r| StatusMarker::from_db(&r.status_marker));
            DeveloperStatusDto {
                kode_cabang: dev.kode_cabang.clone(),
                nama_developer: dev.nama_developer.clone(),
                latitude: parse_coord(dev.latitude.as_deref()),
                longitude: parse_coord(dev.longitude.as_deref()),
                status,
                color: DeveloperStatusDto::color_for(status),
                visit_date: row.map(|r| r.visit_date),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn developer(nama: &str, lat: Option<&str>) -> Developer {
        Developer {
            id_developer: 1,
            kode_area: None,
            area: None,
            kode_cabang: Some("00101".to_string()),
            cabang_padanan: None,
            project: Some("P1".to_string()),
            nama_developer: nama.to_string(),
            tipe: None,
            latitude: lat.map(|s| s.to_string()),
            longitude: lat.map(|s| s.to_string()),
            jumlah_kavling: None,
            ready_stock: None,
            sisa_potensi: None,
            terjual: Some(10),
        }
    }

    fn status_row(nama: &str, status: &str) -> DeveloperStatusRow {
        DeveloperStatusRow {
            kode_cabang: Some("00101".to_string()),
            nama_developer: nama.to_string(),
            visit_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            status_marker: status.to_string(),
        }
    }

    #[test]
    fn visited_developer_gets_status_and_color() {
        let devs = vec![developer("Acme", Some("-6.9"))];
        let rows = vec![status_row("Acme", "HIJAU")];

        let out = overlay_status(&devs, &rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].status, Some(StatusMarker::Hijau));
        assert_eq!(out[0].color, "green");
        assert!(out[0].visit_date.is_some());
    }

    #[test]
    fn unvisited_developer_gets_default_color() {
        let devs = vec![developer("Acme", None), developer("Beta", None)];
        let rows = vec![status_row("Acme", "MERAH")];

        let out = overlay_status(&devs, &rows);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].color, "red");

        let beta = &out[1];
        assert_eq!(beta.status, None);
        assert_eq!(beta.color, "#33ff66");
        assert_eq!(beta.visit_date, None);
    }

    #[test]
    fn status_row_without_developer_is_dropped() {
        let devs = vec![developer("Acme", None)];
        let rows = vec![status_row("Ghost", "KUNING")];

        let out = overlay_status(&devs, &rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].status, None);
    }

    #[test]
    fn unknown_status_text_is_treated_as_unvisited_color() {
        let devs = vec![developer("Acme", None)];
        let rows = vec![status_row("Acme", "UNGU")];

        let out = overlay_status(&devs, &rows);
        assert_eq!(out[0].status, None);
        assert_eq!(out[0].color, "#33ff66");
        // the visit date is still real even when the marker text is not
        assert!(out[0].visit_date.is_some());
    }

    #[test]
    fn coordinates_are_parsed() {
        let devs = vec![developer("Acme", Some("-6.9175"))];
        let out = overlay_status(&devs, &[]);
        assert_eq!(out[0].latitude, Some(-6.9175));
    }
}
