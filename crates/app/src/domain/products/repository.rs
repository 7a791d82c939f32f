//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    products::records::{ProductRecord, ProductUuid},
    restaurants::records::RestaurantUuid,
};

const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        product_from_prefixed_row(row, "")
    }
}

/// Decode a product from columns that share a common prefix, as produced by joins
/// (`product_uuid`, `product_price`, ...).
pub(crate) fn product_from_prefixed_row(row: &PgRow, prefix: &str) -> sqlx::Result<ProductRecord> {
    let col = |name: &str| format!("{prefix}{name}");

    let price: Decimal = row.try_get(col("price").as_str())?;

    if price.is_sign_negative() {
        return Err(sqlx::Error::ColumnDecode {
            index: col("price"),
            source: format!("negative price {price}").into(),
        });
    }

    Ok(ProductRecord {
        uuid: ProductUuid::from_uuid(row.try_get(col("uuid").as_str())?),
        restaurant_uuid: RestaurantUuid::from_uuid(row.try_get(col("restaurant_uuid").as_str())?),
        name: row.try_get(col("name").as_str())?,
        price,
        created_at: row
            .try_get::<SqlxTimestamp, _>(col("created_at").as_str())?
            .to_jiff(),
    })
}
