use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::companies::dtos::CompanyPayloadDto;
use crate::features::companies::models::PerusahaanK1;
use crate::shared::types::{Paged, PaginateQuery};

const COLUMNS: &str =
    "id_k1, nama_perusahaan, latitude, longitude, kode_cabang, nama_cabang, jumlah_payroll";

/// Service for K1 payroll company records
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_all(&self) -> Result<Vec<PerusahaanK1>> {
        let rows = sqlx::query_as::<_, PerusahaanK1>(&format!(
            "SELECT {} FROM perusahaan_k1 ORDER BY id_k1 DESC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch K1 companies: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// Paginated listing, newest record first, with search across company
    /// name, branch name and branch code
    pub async fn paginate(&self, query: &PaginateQuery, limit: i64) -> Result<Paged<PerusahaanK1>> {
        let offset = query.offset(limit);

        let (rows, total) = match query.search_term() {
            Some(term) => {
                let pattern = format!("%{}%", term);
                let rows = sqlx::query_as::<_, PerusahaanK1>(&format!(
                    "SELECT {} FROM perusahaan_k1 \
                     WHERE nama_perusahaan ILIKE $1 OR nama_cabang ILIKE $1 OR kode_cabang ILIKE $1 \
                     ORDER BY id_k1 DESC LIMIT $2 OFFSET $3",
                    COLUMNS
                ))
                .bind(&pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await;

                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM perusahaan_k1 \
                     WHERE nama_perusahaan ILIKE $1 OR nama_cabang ILIKE $1 OR kode_cabang ILIKE $1",
                )
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await;

                (rows, total)
            }
            None => {
                let rows = sqlx::query_as::<_, PerusahaanK1>(&format!(
                    "SELECT {} FROM perusahaan_k1 ORDER BY id_k1 DESC LIMIT $1 OFFSET $2",
                    COLUMNS
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await;

                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM perusahaan_k1")
                    .fetch_one(&self.pool)
                    .await;

                (rows, total)
            }
        };

        let rows = rows.map_err(|e| {
            tracing::error!("Failed to paginate K1 companies: {:?}", e);
            AppError::Database(e)
        })?;
        let total = total.map_err(|e| {
            tracing::error!("Failed to count K1 companies: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(Paged::new(rows, total, limit))
    }

    pub async fn get_by_id(&self, id_k1: i32) -> Result<PerusahaanK1> {
        let company = sqlx::query_as::<_, PerusahaanK1>(&format!(
            "SELECT {} FROM perusahaan_k1 WHERE id_k1 = $1",
            COLUMNS
        ))
        .bind(id_k1)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch K1 company {}: {:?}", id_k1, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Company not found".to_string()))?;

        Ok(company)
    }

    pub async fn create(&self, payload: &CompanyPayloadDto) -> Result<PerusahaanK1> {
        let company = sqlx::query_as::<_, PerusahaanK1>(&format!(
            "INSERT INTO perusahaan_k1 \
             (nama_perusahaan, latitude, longitude, kode_cabang, nama_cabang, jumlah_payroll) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            COLUMNS
        ))
        .bind(&payload.nama_perusahaan)
        .bind(&payload.latitude)
        .bind(&payload.longitude)
        .bind(&payload.kode_cabang)
        .bind(&payload.nama_cabang)
        .bind(payload.jumlah_payroll)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to create K1 company {}: {:?}",
                payload.nama_perusahaan,
                e
            );
            AppError::Database(e)
        })?;

        Ok(company)
    }

    pub async fn update(&self, id_k1: i32, payload: &CompanyPayloadDto) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE perusahaan_k1 \
             SET nama_perusahaan = $1, latitude = $2, longitude = $3, \
                 kode_cabang = $4, nama_cabang = $5, jumlah_payroll = $6 \
             WHERE id_k1 = $7",
        )
        .bind(&payload.nama_perusahaan)
        .bind(&payload.latitude)
        .bind(&payload.longitude)
        .bind(&payload.kode_cabang)
        .bind(&payload.nama_cabang)
        .bind(payload.jumlah_payroll)
        .bind(id_k1)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update K1 company {}: {:?}", id_k1, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id_k1: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM perusahaan_k1 WHERE id_k1 = $1")
            .bind(id_k1)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete K1 company {}: {:?}", id_k1, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
