use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::areas::dtos::{AreaPayloadDto, AreaTree, BranchNode};
use crate::features::areas::models::{Area, AreaTreeRow, BranchTreeRow};
use crate::features::areas::services::tree_assembler::{assemble_area_tree, assemble_branch};

const AREA_TREE_SQL: &str = r#"
    SELECT
        area.kode_area,
        area.nama_area,
        area.latitude AS area_lat,
        area.longitude AS area_lon,
        cabang.kode_cabang,
        cabang.unit_kerja AS cabang_nama,
        cabang.nama AS cabang_nama_manager,
        cabang.latitude AS cabang_lat,
        cabang.longitude AS cabang_lon,
        developer.dev AS developer_nama,
        developer.latitude AS developer_lat,
        developer.longitude AS developer_lon,
        developer.project AS developer_project,
        developer.tipe AS developer_tipe,
        perusahaan_k1.nama_perusahaan AS k1_nama,
        perusahaan_k1.latitude AS k1_lat,
        perusahaan_k1.longitude AS k1_lon,
        perusahaan_k1.jumlah_payroll AS k1_payroll
    FROM area
    LEFT JOIN cabang ON area.kode_area = cabang.kode_area
    LEFT JOIN developer ON cabang.kode_cabang = developer.kode_cabang
    LEFT JOIN perusahaan_k1 ON cabang.kode_cabang = perusahaan_k1.kode_cabang
    WHERE area.kode_area = $1
    ORDER BY cabang.nama
"#;

const BRANCH_TREE_SQL: &str = r#"
    SELECT
        cabang.kode_cabang,
        cabang.unit_kerja AS cabang_nama,
        cabang.nama AS cabang_nama_manager,
        cabang.latitude AS cabang_lat,
        cabang.longitude AS cabang_lon,
        developer.dev AS developer_nama,
        developer.latitude AS developer_lat,
        developer.longitude AS developer_lon,
        developer.project AS developer_project,
        developer.tipe AS developer_tipe,
        perusahaan_k1.nama_perusahaan AS k1_nama,
        perusahaan_k1.latitude AS k1_lat,
        perusahaan_k1.longitude AS k1_lon,
        perusahaan_k1.jumlah_payroll AS k1_payroll
    FROM cabang
    LEFT JOIN developer ON cabang.kode_cabang = developer.kode_cabang
    LEFT JOIN perusahaan_k1 ON cabang.kode_cabang = perusahaan_k1.kode_cabang
    WHERE cabang.kode_cabang = $1
"#;

/// Service for the area hierarchy: master rows plus the assembled tree
pub struct AreaService {
    pool: PgPool,
}

impl AreaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every area, ordered by name
    pub async fn get_all(&self) -> Result<Vec<Area>> {
        let areas = sqlx::query_as::<_, Area>(
            r#"
            SELECT kode_area, nama_area, latitude, longitude
            FROM area
            ORDER BY nama_area
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch areas: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(areas)
    }

    /// Assemble the full nested tree for one area: branches with their
    /// de-duplicated developers and K1 companies
    pub async fn get_tree(&self, kode_area: &str) -> Result<AreaTree> {
        let rows = sqlx::query_as::<_, AreaTreeRow>(AREA_TREE_SQL)
            .bind(kode_area)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch area tree for {}: {:?}", kode_area, e);
                AppError::Database(e)
            })?;

        assemble_area_tree(rows)
            .ok_or_else(|| AppError::NotFound(format!("Area '{}' not found", kode_area)))
    }

    /// Assemble a single branch node with its children
    pub async fn get_branch_tree(&self, kode_cabang: &str) -> Result<BranchNode> {
        let rows = sqlx::query_as::<_, BranchTreeRow>(BRANCH_TREE_SQL)
            .bind(kode_cabang)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch branch tree for {}: {:?}", kode_cabang, e);
                AppError::Database(e)
            })?;

        assemble_branch(rows)
            .ok_or_else(|| AppError::NotFound(format!("Branch '{}' not found", kode_cabang)))
    }

    pub async fn create(&self, payload: &AreaPayloadDto) -> Result<Area> {
        let area = sqlx::query_as::<_, Area>(
            r#"
            INSERT INTO area (kode_area, nama_area, latitude, longitude)
            VALUES ($1, $2, $3, $4)
            RETURNING kode_area, nama_area, latitude, longitude
            "#,
        )
        .bind(&payload.kode_area)
        .bind(&payload.nama_area)
        .bind(&payload.latitude)
        .bind(&payload.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create area {}: {:?}", payload.kode_area, e);
            AppError::Database(e)
        })?;

        Ok(area)
    }

    /// Update an area; false when the key matched nothing
    pub async fn update(&self, kode_area: &str, payload: &AreaPayloadDto) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE area
            SET nama_area = $1, latitude = $2, longitude = $3
            WHERE kode_area = $4
            "#,
        )
        .bind(&payload.nama_area)
        .bind(&payload.latitude)
        .bind(&payload.longitude)
        .bind(kode_area)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update area {}: {:?}", kode_area, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an area. Branches keep their kode_area reference; the relation
    /// is soft and never cascades.
    pub async fn delete(&self, kode_area: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM area WHERE kode_area = $1")
            .bind(kode_area)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete area {}: {:?}", kode_area, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
