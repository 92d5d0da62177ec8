use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::developers::dtos::DeveloperPayloadDto;
use crate::features::developers::models::Developer;
use crate::shared::types::{Paged, PaginateQuery};

const COLUMNS: &str = "id_developer, kode_area, area, kode_cabang, cabang_padanan, project, \
                       dev AS nama_developer, tipe, latitude, longitude, \
                       jumlah_kavling, ready_stock, sisa_potensi, terjual";

/// Service for developer (project) records
pub struct DeveloperService {
    pool: PgPool,
}

impl DeveloperService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All developers of one branch
    pub async fn get_by_cabang(&self, kode_cabang: &str) -> Result<Vec<Developer>> {
        let rows = sqlx::query_as::<_, Developer>(&format!(
            "SELECT {} FROM developer WHERE kode_cabang = $1",
            COLUMNS
        ))
        .bind(kode_cabang)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch developers for {}: {:?}", kode_cabang, e);
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// Every developer, for the admin listing
    pub async fn get_all(&self) -> Result<Vec<Developer>> {
        let rows = sqlx::query_as::<_, Developer>(&format!(
            "SELECT {} FROM developer ORDER BY kode_cabang ASC",
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch developers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// Paginated listing with search across branch code, developer name and
    /// project name
    pub async fn paginate(&self, query: &PaginateQuery, limit: i64) -> Result<Paged<Developer>> {
        let offset = query.offset(limit);

        let (rows, total) = match query.search_term() {
            Some(term) => {
                let pattern = format!("%{}%", term);
                let rows = sqlx::query_as::<_, Developer>(&format!(
                    "SELECT {} FROM developer \
                     WHERE kode_cabang ILIKE $1 OR dev ILIKE $1 OR project ILIKE $1 \
                     ORDER BY kode_cabang ASC LIMIT $2 OFFSET $3",
                    COLUMNS
                ))
                .bind(&pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await;

                let total = sqlx::query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM developer \
                     WHERE kode_cabang ILIKE $1 OR dev ILIKE $1 OR project ILIKE $1",
                )
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await;

                (rows, total)
            }
            None => {
                let rows = sqlx::query_as::<_, Developer>(&format!(
                    "SELECT {} FROM developer ORDER BY kode_cabang ASC LIMIT $1 OFFSET $2",
                    COLUMNS
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await;

                let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM developer")
                    .fetch_one(&self.pool)
                    .await;

                (rows, total)
            }
        };

        let rows = rows.map_err(|e| {
            tracing::error!("Failed to paginate developers: {:?}", e);
            AppError::Database(e)
        })?;
        let total = total.map_err(|e| {
            tracing::error!("Failed to count developers: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(Paged::new(rows, total, limit))
    }

    pub async fn get_by_id(&self, id_developer: i32) -> Result<Developer> {
        let developer = sqlx::query_as::<_, Developer>(&format!(
            "SELECT {} FROM developer WHERE id_developer = $1",
            COLUMNS
        ))
        .bind(id_developer)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch developer {}: {:?}", id_developer, e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Developer not found".to_string()))?;

        Ok(developer)
    }

    /// Developer master row by (branch, name)
    pub async fn get_detail(&self, kode_cabang: &str, nama_developer: &str) -> Result<Developer> {
        let developer = sqlx::query_as::<_, Developer>(&format!(
            "SELECT {} FROM developer WHERE kode_cabang = $1 AND dev = $2 LIMIT 1",
            COLUMNS
        ))
        .bind(kode_cabang)
        .bind(nama_developer)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch developer {} at {}: {:?}",
                nama_developer,
                kode_cabang,
                e
            );
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound("Developer not found".to_string()))?;

        Ok(developer)
    }

    pub async fn create(&self, payload: &DeveloperPayloadDto) -> Result<Developer> {
        let developer = sqlx::query_as::<_, Developer>(&format!(
            "INSERT INTO developer \
             (kode_area, area, kode_cabang, cabang_padanan, project, dev, tipe, \
              latitude, longitude, jumlah_kavling, ready_stock, sisa_potensi, terjual) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {}",
            COLUMNS
        ))
        .bind(&payload.kode_area)
        .bind(&payload.area)
        .bind(&payload.kode_cabang)
        .bind(&payload.cabang_padanan)
        .bind(&payload.project)
        .bind(&payload.nama_developer)
        .bind(&payload.tipe)
        .bind(&payload.latitude)
        .bind(&payload.longitude)
        .bind(payload.jumlah_kavling)
        .bind(payload.ready_stock)
        .bind(payload.sisa_potensi)
        .bind(payload.terjual)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to create developer {}: {:?}",
                payload.nama_developer,
                e
            );
            AppError::Database(e)
        })?;

        Ok(developer)
    }

    pub async fn update(&self, id_developer: i32, payload: &DeveloperPayloadDto) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE developer \
             SET kode_area = $1, area = $2, kode_cabang = $3, cabang_padanan = $4, \
                 project = $5, dev = $6, tipe = $7, latitude = $8, longitude = $9, \
                 jumlah_kavling = $10, ready_stock = $11, sisa_potensi = $12, terjual = $13 \
             WHERE id_developer = $14",
        )
        .bind(&payload.kode_area)
        .bind(&payload.area)
        .bind(&payload.kode_cabang)
        .bind(&payload.cabang_padanan)
        .bind(&payload.project)
        .bind(&payload.nama_developer)
        .bind(&payload.tipe)
        .bind(&payload.latitude)
        .bind(&payload.longitude)
        .bind(payload.jumlah_kavling)
        .bind(payload.ready_stock)
        .bind(payload.sisa_potensi)
        .bind(payload.terjual)
        .bind(id_developer)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update developer {}: {:?}", id_developer, e);
            AppError::Database(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id_developer: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM developer WHERE id_developer = $1")
            .bind(id_developer)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete developer {}: {:?}", id_developer, e);
                AppError::Database(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
