use chrono::NaiveDate;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::developers::services::DeveloperService;
use crate::features::visits::dtos::{DeveloperDetailDto, DeveloperStatusDto, UpdateVisitDto};
use crate::features::visits::models::{DeveloperStatusRow, Visit};
use crate::features::visits::services::status_overlay::overlay_status;

const COLUMNS: &str = "id_visit, kode_cabang, nama_developer, visit_date, \
                       jumlah_kavling, ready_stock, sisa_potensi, terjual, \
                       foto_visit, created_at";

/// Service for the developer visit log and the marker status overlay
pub struct VisitService {
    pool: PgPool,
}

impl VisitService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Visit history, newest visit first, optionally narrowed to a branch
    /// and a developer name
    pub async fn list(
        &self,
        kode_cabang: Option<&str>,
        nama_developer: Option<&str>,
    ) -> Result<Vec<Visit>> {
        let rows = match (kode_cabang, nama_developer) {
            (Some(cabang), Some(nama)) => {
                sqlx::query_as::<_, Visit>(&format!(
                    "SELECT {} FROM developer_visit \
                     WHERE kode_cabang = $1 AND nama_developer = $2 \
                     ORDER BY visit_date DESC, id_visit DESC",
                    COLUMNS
                ))
                .bind(cabang)
                .bind(nama)
                .fetch_all(&self.pool)
                .await
            }
            (Some(cabang), None) => {
                sqlx::query_as::<_, Visit>(&format!(
                    "SELECT {} FROM developer_visit WHERE kode_cabang = $1 \
                     ORDER BY visit_date DESC, id_visit DESC",
                    COLUMNS
                ))
                .bind(cabang)
                .fetch_all(&self.pool)
                .await
            }
            (None, Some(nama)) => {
                sqlx::query_as::<_, Visit>(&format!(
                    "SELECT {} FROM developer_visit WHERE nama_developer = $1 \
                     ORDER BY visit_date DESC, id_visit DESC",
                    COLUMNS
                ))
                .bind(nama)
                .fetch_all(&self.pool)
                .await
            }
            (None, None) => {
                sqlx::query_as::<_, Visit>(&format!(
                    "SELECT {} FROM developer_visit ORDER BY visit_date DESC, id_visit DESC",
                    COLUMNS
                ))
                .fetch_all(&self.pool)
                .await
            }
        };

        rows.map_err(|e| {
            tracing::error!("Failed to fetch visits: {:?}", e);
            AppError::Database(e)
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        kode_cabang: &str,
        nama_developer: &str,
        visit_date: NaiveDate,
        jumlah_kavling: Option<i32>,
        ready_stock: Option<i32>,
        sisa_potensi: Option<i32>,
        terjual: Option<i32>,
        foto_visit: Option<String>,
    ) -> Result<Visit> {
        let visit = sqlx::query_as::<_, Visit>(&format!(
            "INSERT INTO developer_visit \
             (kode_cabang, nama_developer, visit_date, jumlah_kavling, ready_stock, \
              sisa_potensi, terjual, foto_visit) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            COLUMNS
        ))
        .bind(kode_cabang)
        .bind(nama_developer)
        .bind(visit_date)
        .bind(jumlah_kavling)
        .bind(ready_stock)
        .bind(sisa_potensi)
        .bind(terjual)
        .bind(foto_visit)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to create visit for {} at {}: {:?}",
                nama_developer,
                kode_cabang,
                e
            );
            AppError::Database(e)
        })?;

        Ok(visit)
    }

    pub async fn update(&self, id_visit: i32, payload: &UpdateVisitDto) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE developer_visit \
             SET kode_cabang = $1, nama_developer = $2, visit_date = $3, \
                 jumlah_kavling = $4, ready_stock = $5, sisa_potensi = $6, terjual = $7 \
             WHERE id_visit = $8",
        )
        .bind(&payload.kode_cabang)
        .bind(&payload.nama_developer)
        .bind(payload.visit_date)
        .bind(payload.jumlah_kavling)
        .bind(payload.ready_stock)
        .bind(payload.sisa_potensi)
        .bind(payload.terjual)
        .bind(id_visit)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update visit {}: {:?}", id_visit, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id_visit: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM developer_visit WHERE id_visit = $1")
            .bind(id_visit)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete visit {}: {:?}", id_visit, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Latest visit of one developer, if any
    pub async fn latest(&self, kode_cabang: &str, nama_developer: &str) -> Result<Option<Visit>> {
        let visit = sqlx::query_as::<_, Visit>(&format!(
            "SELECT {} FROM developer_visit \
             WHERE kode_cabang = $1 AND nama_developer = $2 \
             ORDER BY visit_date DESC, id_visit DESC LIMIT 1",
            COLUMNS
        ))
        .bind(kode_cabang)
        .bind(nama_developer)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch latest visit for {} at {}: {:?}",
                nama_developer,
                kode_cabang,
                e
            );
            AppError::Database(e)
        })?;

        Ok(visit)
    }

    /// Marker status overlay for one branch: every developer of the branch
    /// with its latest-visit status, unvisited ones with the default color
    pub async fn status_overlay(
        &self,
        developers: &DeveloperService,
        kode_cabang: &str,
    ) -> Result<Vec<DeveloperStatusDto>> {
        let devs = developers.get_by_cabang(kode_cabang).await?;
        let rows = sqlx::query_as::<_, DeveloperStatusRow>(
            "SELECT kode_cabang, nama_developer, visit_date, status_marker \
             FROM v_marker_developer_status WHERE kode_cabang = $1",
        )
        .bind(kode_cabang)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch status rows for {}: {:?}", kode_cabang, e);
            AppError::Database(e)
        })?;

        Ok(overlay_status(&devs, &rows))
    }

    /// Developer master data plus the latest visit
    pub async fn developer_detail(
        &self,
        developers: &DeveloperService,
        kode_cabang: &str,
        nama_developer: &str,
    ) -> Result<DeveloperDetailDto> {
        let developer = developers.get_detail(kode_cabang, nama_developer).await?;
        let visit = self.latest(kode_cabang, nama_developer).await?;

        Ok(DeveloperDetailDto { developer, visit })
    }
}
