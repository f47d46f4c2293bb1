//! Localized reply catalog.
//!
//! The strings are carried over verbatim from the production bot, including
//! its asymmetries: the order confirmation and the order-path not-found
//! reply only exist in Indonesian, while stock reports and error prompts
//! are bilingual. Keep the wording stable; downstream support tooling
//! matches on it.

use rust_decimal::Decimal;

use crate::errors::OrderError;
use crate::intent::Language;

/// Multi-sentence Indonesian opening hook, returned verbatim on greeting.
pub const OPENING_ID: &str = "👋 Hai! Selamat datang di layanan pelanggan kami. \
    Kami siap membantu Anda 24/7. \
    Tanyakan apa saja tentang produk, stok, atau pemesanan. \
    Mari kita buat pengalaman belanja Anda menyenangkan! 😊";

pub const GREETING_EN: &str = "Hello! How can I help you today?";

pub fn greeting(language: Language) -> &'static str {
    match language {
        Language::Id => OPENING_ID,
        Language::En => GREETING_EN,
    }
}

pub fn handoff(language: Language) -> &'static str {
    match language {
        Language::Id => "Sedang menghubungkan Anda ke agen manusia. Mohon tunggu sebentar...",
        Language::En => "Connecting you to a human agent. Please wait a moment...",
    }
}

pub fn order_format_error(language: Language) -> &'static str {
    match language {
        Language::Id => "Format pesanan tidak dikenali. Contoh: 'Beli 2 Produk A'",
        Language::En => "Order format not recognized. Example: 'Buy 2 Product A'",
    }
}

pub fn system_error(language: Language) -> &'static str {
    match language {
        Language::Id => "Maaf, terjadi kesalahan pada sistem.",
        Language::En => "Sorry, there was a system error.",
    }
}

pub fn order_confirmation(quantity: i64, fragment: &str, total: Decimal) -> String {
    format!(
        "Pesanan Anda untuk {quantity} {fragment} telah diproses. Total harga: Rp {}.",
        format_rupiah(total)
    )
}

pub fn order_error(error: &OrderError, language: Language, fragment: &str) -> String {
    match error {
        OrderError::Format => order_format_error(language).to_string(),
        OrderError::ProductNotFound => "Produk tidak ditemukan.".to_string(),
        OrderError::InsufficientStock { available } => {
            format!("Maaf, stok untuk {fragment} tidak cukup. Stok tersedia: {available}.")
        }
    }
}

pub fn stock_report(language: Language, fragment: &str, stock: i64, price: Decimal) -> String {
    let price = format_rupiah(price);
    match language {
        Language::Id => format!("Stok {fragment}: {stock} unit. Harga: Rp {price}"),
        Language::En => format!("Stock for {fragment}: {stock} units. Price: Rp {price}"),
    }
}

pub fn stock_not_found(language: Language, fragment: &str) -> String {
    match language {
        Language::Id => format!("Produk '{fragment}' tidak ditemukan."),
        Language::En => format!("Product '{fragment}' not found."),
    }
}

/// Group the integer digits in threes with commas, keeping any fractional
/// part as-is. Prices are non-negative by schema constraint.
pub fn format_rupiah(value: Decimal) -> String {
    let rendered = value.normalize().to_string();
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (position, digit) in digits.iter().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{
        format_rupiah, greeting, order_confirmation, order_error, stock_not_found, stock_report,
        GREETING_EN, OPENING_ID,
    };
    use crate::errors::OrderError;
    use crate::intent::Language;

    #[test]
    fn rupiah_groups_thousands() {
        assert_eq!(format_rupiah(Decimal::new(100_000, 0)), "100,000");
        assert_eq!(format_rupiah(Decimal::new(1_500_000, 0)), "1,500,000");
        assert_eq!(format_rupiah(Decimal::new(999, 0)), "999");
        assert_eq!(format_rupiah(Decimal::ZERO), "0");
    }

    #[test]
    fn rupiah_keeps_fractional_part() {
        assert_eq!(format_rupiah(Decimal::new(12_345_50, 2)), "12,345.5");
    }

    #[test]
    fn greeting_is_verbatim_per_language() {
        assert_eq!(greeting(Language::Id), OPENING_ID);
        assert_eq!(greeting(Language::En), GREETING_EN);
    }

    #[test]
    fn confirmation_reports_computed_total() {
        let reply = order_confirmation(3, "produk a", Decimal::new(300_000, 0));
        assert_eq!(
            reply,
            "Pesanan Anda untuk 3 produk a telah diproses. Total harga: Rp 300,000."
        );
    }

    #[test]
    fn insufficient_stock_reply_names_available_units() {
        let reply = order_error(
            &OrderError::InsufficientStock { available: 10 },
            Language::Id,
            "produk a",
        );
        assert_eq!(reply, "Maaf, stok untuk produk a tidak cukup. Stok tersedia: 10.");
    }

    #[test]
    fn stock_replies_are_localized() {
        let price = Decimal::new(100_000, 0);
        assert_eq!(
            stock_report(Language::Id, "produk a", 10, price),
            "Stok produk a: 10 unit. Harga: Rp 100,000"
        );
        assert_eq!(
            stock_report(Language::En, "produk a", 10, price),
            "Stock for produk a: 10 units. Price: Rp 100,000"
        );
        assert_eq!(stock_not_found(Language::En, "widget"), "Product 'widget' not found.");
    }
}
