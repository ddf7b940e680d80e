use crate::domain::value_objects::FeeAmount;

/// 支払いポート
///
/// 金額の精算手段を抽象化する。実装は現金、カードなどが考えられる。
/// 現在の実装は常に成功するが、失敗するテストダブルを差し替えられるよう
/// 契約としては成否をboolで返す。
pub trait PaymentMethod {
    /// 金額の支払いを試みる
    ///
    /// 副作用：試行した支払いの通知を出力する（金額、カードの場合は
    /// 下4桁のみのマスク済み番号）。
    fn pay(&self, amount: FeeAmount) -> bool;
}
