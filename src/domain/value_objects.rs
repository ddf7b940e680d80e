use serde::{Deserialize, Serialize};

/// 書籍ID - カタログ内で一意な識別子
///
/// 利用者が入力した文字列をそのまま識別子として使う（例: "B002", "E001"）。
/// 生成後は不変。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// 延滞料金
///
/// 不変条件：料金は非負（型で保証）。
/// 浮動小数点の誤差を避けるため、内部表現はセント単位の整数。
/// $2.00 は 200 セント。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeeAmount(u64);

impl FeeAmount {
    /// セント単位で生成
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// 料金なし（0セント）
    pub fn zero() -> Self {
        Self(0)
    }

    /// セント単位の値
    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for FeeAmount {
    /// "$2.00" 形式で表示する
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // TDD: BookId のテスト
    #[test]
    fn test_book_id_keeps_caller_supplied_value() {
        let id = BookId::new("B002");
        assert_eq!(id.value(), "B002");
    }

    #[test]
    fn test_book_id_equality() {
        assert_eq!(BookId::new("B001"), BookId::from("B001"));
        assert_ne!(BookId::new("B001"), BookId::new("B002"));
    }

    #[test]
    fn test_book_id_display() {
        assert_eq!(BookId::new("E001").to_string(), "E001");
    }

    // TDD: FeeAmount のテスト
    #[test]
    fn test_fee_amount_zero() {
        let fee = FeeAmount::zero();
        assert_eq!(fee.cents(), 0);
        assert!(fee.is_zero());
    }

    #[test]
    fn test_fee_amount_from_cents() {
        let fee = FeeAmount::from_cents(200);
        assert_eq!(fee.cents(), 200);
        assert!(!fee.is_zero());
    }

    #[test]
    fn test_fee_amount_display_formats_dollars_and_cents() {
        assert_eq!(FeeAmount::from_cents(200).to_string(), "$2.00");
        assert_eq!(FeeAmount::from_cents(105).to_string(), "$1.05");
        assert_eq!(FeeAmount::from_cents(0).to_string(), "$0.00");
        assert_eq!(FeeAmount::from_cents(7).to_string(), "$0.07");
    }

    #[test]
    fn test_fee_amount_ordering() {
        assert!(FeeAmount::from_cents(50) < FeeAmount::from_cents(200));
    }
}
