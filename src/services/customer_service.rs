// src/services/customer_service.rs
use crate::{
    db,
    error::{is_unique_violation, AppError, AppResult},
    models::customer::{Customer, CustomerPayload},
    services::like_prefix,
};
use sqlx::SqlitePool;

const CUSTOMER_COLUMNS: &str = "id, name, phone, cpf, birthday";

/// Lista os clientes; com `cpf_prefix`, só os cujo cpf começa por ele.
pub async fn find_customers(db_pool: &SqlitePool, cpf_prefix: Option<&str>) -> AppResult<Vec<Customer>> {
    tracing::debug!("Buscando clientes (prefixo cpf: {:?})", cpf_prefix);
    let pattern = cpf_prefix.map(like_prefix);

    let customers = sqlx::query_as::<_, Customer>(&format!(
        r#"
        SELECT {CUSTOMER_COLUMNS}
        FROM customers
        WHERE (?1 IS NULL OR cpf LIKE ?1 ESCAPE '\')
        ORDER BY id ASC
        "#
    ))
    .bind(pattern)
    .fetch_all(db_pool)
    .await?;

    tracing::debug!("Encontrados {} clientes.", customers.len());
    Ok(customers)
}

pub async fn find_customer_by_id(db_pool: &SqlitePool, customer_id: i64) -> AppResult<Option<Customer>> {
    tracing::debug!("Buscando cliente por ID: {}", customer_id);
    let customer = sqlx::query_as::<_, Customer>(&format!(
        "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = ?1"
    ))
    .bind(customer_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(customer)
}

/// Cria um cliente. CPF já registado -> `AppError::Conflict`.
pub async fn create_customer(db_pool: &SqlitePool, payload: &CustomerPayload) -> AppResult<Customer> {
    tracing::info!("Tentando criar cliente com cpf {}", payload.cpf);

    let result = sqlx::query_as::<_, Customer>(&format!(
        r#"
        INSERT INTO customers (name, phone, cpf, birthday)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING {CUSTOMER_COLUMNS}
        "#
    ))
    .bind(payload.name.trim())
    .bind(&payload.phone)
    .bind(&payload.cpf)
    .bind(payload.birthday)
    .fetch_one(db_pool)
    .await;

    match result {
        Ok(customer) => {
            tracing::info!("✅ Cliente criado com id {}.", customer.id);
            Ok(customer)
        }
        Err(e) if is_unique_violation(&e) => Err(cpf_conflict(&payload.cpf)),
        Err(e) => Err(e.into()),
    }
}

/// Atualiza um cliente. Id inexistente -> 404; cpf de outro cliente -> 409.
/// Manter o próprio cpf é permitido.
pub async fn update_customer(
    db_pool: &SqlitePool,
    customer_id: i64,
    payload: &CustomerPayload,
) -> AppResult<Customer> {
    tracing::info!("Atualizando dados para cliente: {}", customer_id);

    let mut tx = db::begin_write(db_pool).await?;

    // 1. Verifica se o cpf pertence a outro cliente
    let owner: Option<i64> = sqlx::query_scalar("SELECT id FROM customers WHERE cpf = ?1")
        .bind(&payload.cpf)
        .fetch_optional(&mut *tx)
        .await?;
    if owner.is_some_and(|id| id != customer_id) {
        return Err(cpf_conflict(&payload.cpf));
    }

    // 2. Atualiza; nenhuma linha devolvida significa id inexistente
    let result = sqlx::query_as::<_, Customer>(&format!(
        r#"
        UPDATE customers
        SET name = ?1, phone = ?2, cpf = ?3, birthday = ?4
        WHERE id = ?5
        RETURNING {CUSTOMER_COLUMNS}
        "#
    ))
    .bind(payload.name.trim())
    .bind(&payload.phone)
    .bind(&payload.cpf)
    .bind(payload.birthday)
    .bind(customer_id)
    .fetch_optional(&mut *tx)
    .await;

    let customer = match result {
        Ok(Some(customer)) => customer,
        Ok(None) => {
            tracing::warn!("Falha ao atualizar: cliente '{}' não encontrado.", customer_id);
            return Err(AppError::not_found("Cliente", customer_id));
        }
        Err(e) if is_unique_violation(&e) => return Err(cpf_conflict(&payload.cpf)),
        Err(e) => return Err(e.into()),
    };

    tx.commit().await?;
    tracing::info!("✅ Dados atualizados com sucesso para cliente: {}", customer_id);
    Ok(customer)
}

fn cpf_conflict(cpf: &str) -> AppError {
    tracing::warn!("CPF {} já está registado.", cpf);
    AppError::Conflict(format!("Já existe um cliente com o cpf {cpf}"))
}
