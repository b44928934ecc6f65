// src/services/rental_service.rs
use crate::{
    db,
    error::{AppError, AppResult},
    models::rental::{CreateRentalPayload, Rental, RentalDetails, RentalDetailsRow, RentalFilter},
    services::pricing,
};
use chrono::NaiveDate;
use sqlx::{SqliteConnection, SqlitePool};

const RENTAL_COLUMNS: &str =
    "id, customer_id, game_id, rent_date, days_rented, return_date, original_price, delay_fee";

/// Lista os alugueis com cliente, jogo e categoria.
/// `customerId` e `gameId` são filtros opcionais (combinam-se com AND).
pub async fn find_rentals(db_pool: &SqlitePool, filter: &RentalFilter) -> AppResult<Vec<RentalDetails>> {
    tracing::debug!("Buscando alugueis com filtro {:?}", filter);

    let rows = sqlx::query_as::<_, RentalDetailsRow>(
        r#"
        SELECT
            r.id, r.customer_id, r.game_id, r.rent_date, r.days_rented,
            r.return_date, r.original_price, r.delay_fee,
            c.name  AS customer_name,
            g.name  AS game_name,
            g.category_id,
            ca.name AS category_name
        FROM rentals r
        JOIN customers  c  ON r.customer_id = c.id
        JOIN games      g  ON r.game_id = g.id
        JOIN categories ca ON g.category_id = ca.id
        WHERE (?1 IS NULL OR r.customer_id = ?1)
          AND (?2 IS NULL OR r.game_id = ?2)
        ORDER BY r.id ASC
        "#,
    )
    .bind(filter.customer_id)
    .bind(filter.game_id)
    .fetch_all(db_pool)
    .await?;

    tracing::debug!("Encontrados {} alugueis.", rows.len());
    Ok(rows.into_iter().map(RentalDetails::from).collect())
}

async fn find_rental_by_id(conn: &mut SqliteConnection, rental_id: i64) -> AppResult<Option<Rental>> {
    let rental = sqlx::query_as::<_, Rental>(&format!(
        "SELECT {RENTAL_COLUMNS} FROM rentals WHERE id = ?1"
    ))
    .bind(rental_id)
    .fetch_optional(conn)
    .await?;
    Ok(rental)
}

/// Abre um aluguel com data `today`.
///
/// Tudo numa transação: cliente e jogo têm de existir (400), o preço é
/// `daysRented × pricePerDay` e o jogo tem de ter pelo menos uma unidade
/// livre, ou seja, alugueis em aberto < `stockTotal` (400).
pub async fn create_rental(
    db_pool: &SqlitePool,
    payload: &CreateRentalPayload,
    today: NaiveDate,
) -> AppResult<Rental> {
    tracing::info!(
        "Tentando alugar jogo {} para cliente {} por {} dias",
        payload.game_id,
        payload.customer_id,
        payload.days_rented
    );

    let mut tx = db::begin_write(db_pool).await?;

    // 1. Cliente
    let customer_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE id = ?1)")
            .bind(payload.customer_id)
            .fetch_one(&mut *tx)
            .await?;
    if !customer_exists {
        return Err(AppError::BadRequest(format!(
            "O cliente com id {} não existe",
            payload.customer_id
        )));
    }

    // 2. Jogo (preço e estoque)
    let game: Option<(String, i64, i64)> =
        sqlx::query_as("SELECT name, stock_total, price_per_day FROM games WHERE id = ?1")
            .bind(payload.game_id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some((game_name, stock_total, price_per_day)) = game else {
        return Err(AppError::BadRequest(format!(
            "O jogo com id {} não existe",
            payload.game_id
        )));
    };

    // 3. Preço original
    let original_price = pricing::original_price(payload.days_rented, price_per_day)
        .ok_or_else(|| AppError::BadRequest("daysRented excede o valor máximo permitido".into()))?;

    // 4. Disponibilidade: unidades em aberto vs estoque total
    let open_rentals: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM rentals WHERE game_id = ?1 AND return_date IS NULL",
    )
    .bind(payload.game_id)
    .fetch_one(&mut *tx)
    .await?;
    if open_rentals >= stock_total {
        tracing::warn!(
            "Jogo '{}' indisponível: {} de {} unidades alugadas.",
            game_name,
            open_rentals,
            stock_total
        );
        return Err(AppError::BadRequest(format!(
            "O jogo '{game_name}' não tem unidades disponíveis"
        )));
    }

    // 5. Insere com returnDate e delayFee a NULL
    let rental = sqlx::query_as::<_, Rental>(&format!(
        r#"
        INSERT INTO rentals (customer_id, game_id, rent_date, days_rented, return_date, original_price, delay_fee)
        VALUES (?1, ?2, ?3, ?4, NULL, ?5, NULL)
        RETURNING {RENTAL_COLUMNS}
        "#
    ))
    .bind(payload.customer_id)
    .bind(payload.game_id)
    .bind(today)
    .bind(payload.days_rented)
    .bind(original_price)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(
        "✅ Aluguel {} criado: {} dias x {} = {}",
        rental.id,
        rental.days_rented,
        price_per_day,
        rental.original_price
    );
    Ok(rental)
}

/// Fecha um aluguel: grava `returnDate = today` e, se houver atraso, a multa.
/// Id inexistente ou aluguel já devolvido -> 404.
pub async fn return_rental(db_pool: &SqlitePool, rental_id: i64, today: NaiveDate) -> AppResult<Rental> {
    tracing::info!("Devolvendo aluguel {}", rental_id);

    let mut tx = db::begin_write(db_pool).await?;

    let rental = find_rental_by_id(&mut tx, rental_id)
        .await?
        .ok_or_else(|| AppError::not_found("Aluguel", rental_id))?;
    if rental.is_returned() {
        tracing::warn!("Aluguel {} já foi devolvido.", rental_id);
        return Err(AppError::NotFound(format!(
            "O aluguel com id {rental_id} já foi devolvido"
        )));
    }

    let price_per_day: i64 = sqlx::query_scalar("SELECT price_per_day FROM games WHERE id = ?1")
        .bind(rental.game_id)
        .fetch_one(&mut *tx)
        .await?;

    let delay_fee = pricing::delay_fee(rental.rent_date, today, rental.days_rented, price_per_day);
    if let Some(fee) = delay_fee {
        tracing::info!("Aluguel {} devolvido com atraso, multa de {}", rental_id, fee);
    }

    let returned = sqlx::query_as::<_, Rental>(&format!(
        r#"
        UPDATE rentals
        SET return_date = ?1, delay_fee = ?2
        WHERE id = ?3 AND return_date IS NULL
        RETURNING {RENTAL_COLUMNS}
        "#
    ))
    .bind(today)
    .bind(delay_fee)
    .bind(rental_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!("✅ Aluguel {} devolvido em {}.", rental_id, today);
    Ok(returned)
}

/// Apaga um aluguel já devolvido. Id inexistente -> 404; em aberto -> 400.
pub async fn delete_rental(db_pool: &SqlitePool, rental_id: i64) -> AppResult<()> {
    tracing::info!("Tentando apagar aluguel {}", rental_id);

    let mut tx = db::begin_write(db_pool).await?;

    let rental = find_rental_by_id(&mut tx, rental_id)
        .await?
        .ok_or_else(|| AppError::not_found("Aluguel", rental_id))?;
    if !rental.is_returned() {
        tracing::warn!("Aluguel {} ainda não foi devolvido, não pode ser apagado.", rental_id);
        return Err(AppError::BadRequest(format!(
            "O aluguel com id {rental_id} ainda não foi devolvido"
        )));
    }

    sqlx::query("DELETE FROM rentals WHERE id = ?1")
        .bind(rental_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!("✅ Aluguel {} apagado.", rental_id);
    Ok(())
}
