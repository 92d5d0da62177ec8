use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::cabang::dtos::{CreateCabangDto, UpdateCabangDto};
use crate::features::cabang::models::Cabang;
use crate::shared::types::{Paged, PaginateQuery};

const COLUMNS: &str = "kode_cabang, nip, nama, gender, posisi, kelas, unit_kerja, kode_area, \
                       latitude, longitude, alamat, kel, kec, kota";

/// Service for branch (cabang) administration
pub struct CabangService {
    pool: PgPool,
}

impl CabangService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every branch, ordered by manager name
    pub async fn get_all(&self) -> Result<Vec<Cabang>> {
        let rows = sqlx::query_as::<_, Cabang>(&format!(
            "SELECT {} FROM cabang ORDER BY nama",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch cabang: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    pub async fn get_by_kode(&self, kode_cabang: &str) -> Result<Cabang> {
        let cabang = sqlx::query_as::<_, Cabang>(&format!(
            "SELECT {} FROM cabang WHERE kode_cabang = $1",
            COLUMNS
        ))
        .bind(kode_cabang)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch cabang {}: {:?}", kode_cabang, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Cabang not found".to_string()))?;

        Ok(cabang)
    }

    /// Paginated listing with case-insensitive substring search across
    /// kode_cabang, nama and unit_kerja. The total reflects the same filter.
    pub async fn paginate(&self, query: &PaginateQuery, limit: i64) -> Result<Paged<Cabang>> {
        let offset = query.offset(limit);

        let (rows, total) = match query.search_term() {
            Some(term) => {
                let pattern = format!("%{}%", term);
                let rows = sqlx::query_as::<_, Cabang>(&format!(
                    "SELECT {} FROM cabang \
                     WHERE kode_cabang ILIKE $1 OR nama ILIKE $1 OR unit_kerja ILIKE $1 \
                     ORDER BY kode_cabang ASC LIMIT $2 OFFSET $3",
                    COLUMNS
                ))
                .bind(&pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await;

                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM cabang \
                     WHERE kode_cabang ILIKE $1 OR nama ILIKE $1 OR unit_kerja ILIKE $1",
                )
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await;

                (rows, total)
            }
            None => {
                let rows = sqlx::query_as::<_, Cabang>(&format!(
                    "SELECT {} FROM cabang ORDER BY kode_cabang ASC LIMIT $1 OFFSET $2",
                    COLUMNS
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await;

                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cabang")
                    .fetch_one(&self.pool)
                    .await;

                (rows, total)
            }
        };

        let rows = rows.map_err(|e| {
            tracing::error!("Failed to paginate cabang: {:?}", e);
            AppError::Database(e)
        })?;
        let total = total.map_err(|e| {
            tracing::error!("Failed to count cabang: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(Paged::new(rows, total, limit))
    }

    pub async fn create(&self, payload: &CreateCabangDto) -> Result<Cabang> {
        let cabang = sqlx::query_as::<_, Cabang>(&format!(
            "INSERT INTO cabang \
             (kode_cabang, nip, nama, gender, posisi, kelas, unit_kerja, kode_area, \
              latitude, longitude, alamat, kel, kec, kota) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {}",
            COLUMNS
        ))
        .bind(&payload.kode_cabang)
        .bind(&payload.nip)
        .bind(&payload.nama)
        .bind(&payload.gender)
        .bind(&payload.posisi)
        .bind(&payload.kelas)
        .bind(&payload.unit_kerja)
        .bind(&payload.kode_area)
        .bind(&payload.latitude)
        .bind(&payload.longitude)
        .bind(&payload.alamat)
        .bind(&payload.kel)
        .bind(&payload.kec)
        .bind(&payload.kota)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create cabang {}: {:?}", payload.kode_cabang, e);
            AppError::Database(e)
        })?;

        Ok(cabang)
    }

    pub async fn update(&self, kode_cabang: &str, payload: &UpdateCabangDto) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE cabang \
             SET nama = $1, gender = $2, posisi = $3, kelas = $4, unit_kerja = $5, \
                 kode_area = $6, latitude = $7, longitude = $8, alamat = $9, \
                 kel = $10, kec = $11, kota = $12 \
             WHERE kode_cabang = $13",
        )
        .bind(&payload.nama)
        .bind(&payload.gender)
        .bind(&payload.posisi)
        .bind(&payload.kelas)
        .bind(&payload.unit_kerja)
        .bind(&payload.kode_area)
        .bind(&payload.latitude)
        .bind(&payload.longitude)
        .bind(&payload.alamat)
        .bind(&payload.kel)
        .bind(&payload.kec)
        .bind(&payload.kota)
        .bind(kode_cabang)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update cabang {}: {:?}", kode_cabang, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, kode_cabang: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM cabang WHERE kode_cabang = $1")
            .bind(kode_cabang)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete cabang {}: {:?}", kode_cabang, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
