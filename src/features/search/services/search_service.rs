use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::companies::models::PerusahaanK1;
use crate::features::developers::models::Developer;
use crate::features::search::dtos::SearchHit;
use crate::shared::geo::parse_coord;

/// Case-insensitive substring search merged across developers and K1
/// companies. Developer hits come first, each group in its natural order.
pub struct SearchService {
    pool: PgPool,
}

impl SearchService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn search(&self, term: &str) -> Result<Vec<SearchHit>> {
        let pattern = format!("%{}%", term);

        let developers = sqlx::query_as::<_, Developer>(
            "SELECT id_developer, kode_area, area, kode_cabang, cabang_padanan, project, \
                    dev AS nama_developer, tipe, latitude, longitude, \
                    jumlah_kavling, ready_stock, sisa_potensi, terjual \
             FROM developer WHERE dev ILIKE $1 OR project ILIKE $1 \
             ORDER BY kode_cabang ASC",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Developer search failed for {:?}: {:?}", term, e);
            AppError::Database(e)
        })?;

        let companies = sqlx::query_as::<_, PerusahaanK1>(
            "SELECT id_k1, nama_perusahaan, latitude, longitude, kode_cabang, nama_cabang, \
                    jumlah_payroll \
             FROM perusahaan_k1 WHERE nama_perusahaan ILIKE $1 \
             ORDER BY id_k1 DESC",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("K1 search failed for {:?}: {:?}", term, e);
            AppError::Database(e)
        })?;

        Ok(merge_hits(&developers, &companies))
    }
}

fn merge_hits(developers: &[Developer], companies: &[PerusahaanK1]) -> Vec<SearchHit> {
    let mut hits = Vec::with_capacity(developers.len() + companies.len());

    for dev in developers {
        hits.push(SearchHit {
            kind: "developer".to_string(),
            label: dev.nama_developer.clone(),
            project: dev.project.clone(),
            kode_cabang: dev.kode_cabang.clone(),
            lat: parse_coord(dev.latitude.as_deref()),
            lon: parse_coord(dev.longitude.as_deref()),
        });
    }

    for company in companies {
        hits.push(SearchHit {
            kind: "k1".to_string(),
            label: company.nama_perusahaan.clone(),
            project: None,
            kode_cabang: company.kode_cabang.clone(),
            lat: parse_coord(company.latitude.as_deref()),
            lon: parse_coord(company.longitude.as_deref()),
        });
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn developer(nama: &str) -> Developer {
        Developer {
            id_developer: 1,
            kode_area: None,
            area: None,
            kode_cabang: Some("00101".to_string()),
            cabang_padanan: None,
            project: Some("P1".to_string()),
            nama_developer: nama.to_string(),
            tipe: None,
            latitude: Some("-6.9".to_string()),
            longitude: Some("107.6".to_string()),
            jumlah_kavling: None,
            ready_stock: None,
            sisa_potensi: None,
            terjual: None,
        }
    }

    fn company(nama: &str) -> PerusahaanK1 {
        PerusahaanK1 {
            id_k1: 7,
            nama_perusahaan: nama.to_string(),
            latitude: Some("not-a-number".to_string()),
            longitude: None,
            kode_cabang: Some("00102".to_string()),
            nama_cabang: None,
            jumlah_payroll: Some(40),
        }
    }

    #[test]
    fn developers_come_before_companies() {
        let hits = merge_hits(&[developer("Acme")], &[company("CoX")]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].kind, "developer");
        assert_eq!(hits[0].label, "Acme");
        assert_eq!(hits[1].kind, "k1");
        assert_eq!(hits[1].label, "CoX");
    }

    #[test]
    fn company_hits_have_no_project() {
        let hits = merge_hits(&[], &[company("CoX")]);
        assert_eq!(hits[0].project, None);
    }

    #[test]
    fn unparsable_coordinates_become_none() {
        let hits = merge_hits(&[developer("Acme")], &[company("CoX")]);
        assert_eq!(hits[0].lat, Some(-6.9));
        assert_eq!(hits[1].lat, None);
    }
}
