// src/models/rental.rs
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

// Espelha a tabela `rentals`
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: i64,
    pub customer_id: i64,
    pub game_id: i64,
    pub rent_date: NaiveDate,
    pub days_rented: i64,
    pub return_date: Option<NaiveDate>, // NULL enquanto o jogo não for devolvido
    pub original_price: i64,
    pub delay_fee: Option<i64>, // só existe depois da devolução, e só com atraso
}

impl Rental {
    pub fn is_returned(&self) -> bool {
        self.return_date.is_some()
    }
}

/// Corpo de POST /rentals
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalPayload {
    #[validate(range(min = 1, message = "customerId deve ser um id válido"))]
    pub customer_id: i64,
    #[validate(range(min = 1, message = "gameId deve ser um id válido"))]
    pub game_id: i64,
    #[validate(range(min = 1, message = "daysRented deve ser maior que 0"))]
    pub days_rented: i64,
}

/// Query string de GET /rentals (?customerId= e/ou ?gameId=)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub game_id: Option<i64>,
}

// "?customerId=" vazio equivale a não filtrar, como nos outros filtros
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("'{value}' não é um id válido"))),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub category_name: String,
}

/// Aluguel com os dados de cliente/jogo/categoria usados na listagem.
#[derive(Debug, Clone, Serialize)]
pub struct RentalDetails {
    #[serde(flatten)]
    pub rental: Rental,
    pub customer: CustomerSummary,
    pub game: GameSummary,
}

// Linha do JOIN rentals + customers + games + categories
#[derive(Debug, FromRow)]
pub struct RentalDetailsRow {
    #[sqlx(flatten)]
    pub rental: Rental,
    pub customer_name: String,
    pub game_name: String,
    pub category_id: i64,
    pub category_name: String,
}

impl From<RentalDetailsRow> for RentalDetails {
    fn from(row: RentalDetailsRow) -> Self {
        RentalDetails {
            customer: CustomerSummary {
                id: row.rental.customer_id,
                name: row.customer_name,
            },
            game: GameSummary {
                id: row.rental.game_id,
                name: row.game_name,
                category_id: row.category_id,
                category_name: row.category_name,
            },
            rental: row.rental,
        }
    }
}
