// src/services/pricing.rs
//! Regras de preço do aluguel: valor original e multa por atraso.
//! Valores em centavos.
use chrono::NaiveDate;

/// `daysRented × pricePerDay`. `None` em caso de overflow.
pub fn original_price(days_rented: i64, price_per_day: i64) -> Option<i64> {
    days_rented.checked_mul(price_per_day)
}

/// Dias inteiros entre o aluguel e a devolução (em valor absoluto).
pub fn elapsed_days(rent_date: NaiveDate, return_date: NaiveDate) -> i64 {
    (return_date - rent_date).num_days().abs()
}

/// Multa por atraso: `(diasDecorridos − daysRented) × pricePerDay` quando a
/// devolução passa do prazo; `None` quando é feita no prazo.
pub fn delay_fee(
    rent_date: NaiveDate,
    return_date: NaiveDate,
    days_rented: i64,
    price_per_day: i64,
) -> Option<i64> {
    let elapsed = elapsed_days(rent_date, return_date);
    // limitado pelo intervalo de datas do chrono; satura em vez de estourar
    (elapsed > days_rented).then(|| (elapsed - days_rented).saturating_mul(price_per_day))
}
