//! Fold of the flat area join into the nested area tree.
//!
//! The wide left join repeats branch and developer columns once per combined
//! (developer × company) row, so the fold has to collapse duplicates: branches
//! are keyed by code, developers by the (nama, project) pair, companies by
//! name alone. Insertion order is preserved throughout, which keeps the output
//! stable as long as the query's ORDER BY is stable.

use std::collections::HashMap;

use crate::features::areas::dtos::{AreaTree, BranchNode, CompanyNode, DeveloperNode};
use crate::features::areas::models::{AreaTreeRow, BranchTreeRow};
use crate::shared::geo::parse_coord;

/// Fold joined rows into the nested tree. `None` when the row set is empty
/// (area key matched nothing).
pub fn assemble_area_tree(rows: Vec<AreaTreeRow>) -> Option<AreaTree> {
    let first = rows.first()?;

    let mut tree = AreaTree {
        kode_area: first.kode_area.clone(),
        nama_area: first.nama_area.clone(),
        latitude: parse_coord(first.area_lat.as_deref()),
        longitude: parse_coord(first.area_lon.as_deref()),
        branches: Vec::new(),
    };

    // Branch lookup into the ordered vec, first-seen order
    let mut branch_index: HashMap<String, usize> = HashMap::new();

    for row in &rows {
        let Some(kode_cabang) = row.kode_cabang.as_deref() else {
            // Area row with no branch at all
            continue;
        };

        let idx = match branch_index.get(kode_cabang) {
            Some(&idx) => idx,
            None => {
                tree.branches.push(BranchNode {
                    kode_cabang: kode_cabang.to_string(),
                    nama: row.cabang_nama.clone(),
                    nama_manager: row.cabang_nama_manager.clone(),
                    latitude: parse_coord(row.cabang_lat.as_deref()),
                    longitude: parse_coord(row.cabang_lon.as_deref()),
                    developers: Vec::new(),
                    k1_companies: Vec::new(),
                });
                let idx = tree.branches.len() - 1;
                branch_index.insert(kode_cabang.to_string(), idx);
                idx
            }
        };

        let branch = &mut tree.branches[idx];
        attach_developer(branch, row);
        attach_company(branch, row);
    }

    Some(tree)
}

/// Fold rows of the branch-rooted join into a single branch node
pub fn assemble_branch(rows: Vec<BranchTreeRow>) -> Option<BranchNode> {
    let first = rows.first()?;

    let mut branch = BranchNode {
        kode_cabang: first.kode_cabang.clone(),
        nama: first.cabang_nama.clone(),
        nama_manager: first.cabang_nama_manager.clone(),
        latitude: parse_coord(first.cabang_lat.as_deref()),
        longitude: parse_coord(first.cabang_lon.as_deref()),
        developers: Vec::new(),
        k1_companies: Vec::new(),
    };

    for row in &rows {
        if let Some(nama) = row.developer_nama.as_deref() {
            push_developer(
                &mut branch,
                nama,
                row.developer_project.as_deref(),
                row.developer_lat.as_deref(),
                row.developer_lon.as_deref(),
                row.developer_tipe.as_deref(),
            );
        }
        if let Some(nama) = row.k1_nama.as_deref() {
            push_company(
                &mut branch,
                nama,
                row.k1_payroll,
                row.k1_lat.as_deref(),
                row.k1_lon.as_deref(),
            );
        }
    }

    Some(branch)
}

fn attach_developer(branch: &mut BranchNode, row: &AreaTreeRow) {
    if let Some(nama) = row.developer_nama.as_deref() {
        push_developer(
            branch,
            nama,
            row.developer_project.as_deref(),
            row.developer_lat.as_deref(),
            row.developer_lon.as_deref(),
            row.developer_tipe.as_deref(),
        );
    }
}

fn attach_company(branch: &mut BranchNode, row: &AreaTreeRow) {
    if let Some(nama) = row.k1_nama.as_deref() {
        push_company(
            branch,
            nama,
            row.k1_payroll,
            row.k1_lat.as_deref(),
            row.k1_lon.as_deref(),
        );
    }
}

fn push_developer(
    branch: &mut BranchNode,
    nama: &str,
    project: Option<&str>,
    lat: Option<&str>,
    lon: Option<&str>,
    tipe: Option<&str>,
) {
    let exists = branch
        .developers
        .iter()
        .any(|d| d.nama == nama && d.project.as_deref() == project);
    if !exists {
        branch.developers.push(DeveloperNode {
            nama: nama.to_string(),
            project: project.map(str::to_string),
            latitude: parse_coord(lat),
            longitude: parse_coord(lon),
            tipe: tipe.map(str::to_string),
        });
    }
}

fn push_company(
    branch: &mut BranchNode,
    nama: &str,
    payroll: Option<i32>,
    lat: Option<&str>,
    lon: Option<&str>,
) {
    let exists = branch.k1_companies.iter().any(|k| k.nama == nama);
    if !exists {
        branch.k1_companies.push(CompanyNode {
            nama: nama.to_string(),
            payroll,
            latitude: parse_coord(lat),
            longitude: parse_coord(lon),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        kode_cabang: Option<&str>,
        dev: Option<&str>,
        project: Option<&str>,
        k1: Option<&str>,
    ) -> AreaTreeRow {
        AreaTreeRow {
            kode_area: "A01".to_string(),
            nama_area: "Area Satu".to_string(),
            area_lat: Some("-6.9".to_string()),
            area_lon: Some("107.6".to_string()),
            kode_cabang: kode_cabang.map(str::to_string),
            cabang_nama: kode_cabang.map(|k| format!("KC {}", k)),
            cabang_nama_manager: Some("Manager".to_string()),
            cabang_lat: Some("-6.91".to_string()),
            cabang_lon: Some("107.61".to_string()),
            developer_nama: dev.map(str::to_string),
            developer_lat: Some("-6.92".to_string()),
            developer_lon: Some("107.62".to_string()),
            developer_project: project.map(str::to_string),
            developer_tipe: Some("Subsidi".to_string()),
            k1_nama: k1.map(str::to_string),
            k1_lat: Some("-6.93".to_string()),
            k1_lon: Some("107.63".to_string()),
            k1_payroll: Some(120),
        }
    }

    #[test]
    fn empty_rows_is_none() {
        assert!(assemble_area_tree(Vec::new()).is_none());
    }

    #[test]
    fn area_without_branches_has_empty_vec() {
        let mut r = row(None, None, None, None);
        r.cabang_nama = None;
        r.cabang_nama_manager = None;
        let tree = assemble_area_tree(vec![r]).unwrap();
        assert_eq!(tree.kode_area, "A01");
        assert!(tree.branches.is_empty());
    }

    // B1 has ("Acme","P1"), ("Acme","P2") and company CoX; B2 is empty.
    // The join cross-product repeats every combination.
    #[test]
    fn join_duplicates_are_collapsed() {
        let rows = vec![
            row(Some("B1"), Some("Acme"), Some("P1"), Some("CoX")),
            row(Some("B1"), Some("Acme"), Some("P2"), Some("CoX")),
            row(Some("B1"), Some("Acme"), Some("P1"), Some("CoX")),
            row(Some("B2"), None, None, None),
        ];
        let tree = assemble_area_tree(rows).unwrap();

        assert_eq!(tree.branches.len(), 2);
        let b1 = &tree.branches[0];
        assert_eq!(b1.kode_cabang, "B1");
        // same name, different project stays two distinct entries
        assert_eq!(b1.developers.len(), 2);
        assert_eq!(b1.k1_companies.len(), 1);

        let b2 = &tree.branches[1];
        assert!(b2.developers.is_empty());
        assert!(b2.k1_companies.is_empty());
    }

    #[test]
    fn company_deduped_by_name_across_projects() {
        // one company legitimately repeats across two projects of the same
        // developer, but appears once per branch
        let rows = vec![
            row(Some("B1"), Some("Acme"), Some("P1"), Some("CoX")),
            row(Some("B1"), Some("Beta"), Some("P9"), Some("CoX")),
        ];
        let tree = assemble_area_tree(rows).unwrap();
        assert_eq!(tree.branches[0].k1_companies.len(), 1);
        assert_eq!(tree.branches[0].developers.len(), 2);
    }

    #[test]
    fn branches_keep_first_seen_order() {
        let rows = vec![
            row(Some("B3"), None, None, None),
            row(Some("B1"), None, None, None),
            row(Some("B2"), None, None, None),
            row(Some("B1"), None, None, None),
        ];
        let tree = assemble_area_tree(rows).unwrap();
        let codes: Vec<_> = tree
            .branches
            .iter()
            .map(|b| b.kode_cabang.as_str())
            .collect();
        assert_eq!(codes, vec!["B3", "B1", "B2"]);
    }

    #[test]
    fn unparsable_coordinates_become_none() {
        let mut r = row(Some("B1"), Some("Acme"), Some("P1"), None);
        r.area_lat = Some("not-a-number".to_string());
        r.cabang_lat = Some("".to_string());
        r.developer_lat = None;
        let tree = assemble_area_tree(vec![r]).unwrap();

        assert_eq!(tree.latitude, None);
        assert_eq!(tree.longitude, Some(107.6));
        assert_eq!(tree.branches[0].latitude, None);
        assert_eq!(tree.branches[0].developers[0].latitude, None);
    }

    #[test]
    fn branch_fold_mirrors_area_fold() {
        let rows = vec![
            BranchTreeRow {
                kode_cabang: "B1".to_string(),
                cabang_nama: Some("KC B1".to_string()),
                cabang_nama_manager: None,
                cabang_lat: Some("-6.9".to_string()),
                cabang_lon: Some("107.6".to_string()),
                developer_nama: Some("Acme".to_string()),
                developer_lat: None,
                developer_lon: None,
                developer_project: Some("P1".to_string()),
                developer_tipe: None,
                k1_nama: Some("CoX".to_string()),
                k1_lat: None,
                k1_lon: None,
                k1_payroll: Some(7),
            },
            BranchTreeRow {
                kode_cabang: "B1".to_string(),
                cabang_nama: Some("KC B1".to_string()),
                cabang_nama_manager: None,
                cabang_lat: Some("-6.9".to_string()),
                cabang_lon: Some("107.6".to_string()),
                developer_nama: Some("Acme".to_string()),
                developer_lat: None,
                developer_lon: None,
                developer_project: Some("P1".to_string()),
                developer_tipe: None,
                k1_nama: Some("CoX".to_string()),
                k1_lat: None,
                k1_lon: None,
                k1_payroll: Some(7),
            },
        ];
        let branch = assemble_branch(rows).unwrap();
        assert_eq!(branch.developers.len(), 1);
        assert_eq!(branch.k1_companies.len(), 1);
        assert!(assemble_branch(Vec::new()).is_none());
    }
}
