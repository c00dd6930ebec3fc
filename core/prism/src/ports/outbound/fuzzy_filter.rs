//! あいまい検索 Outbound ポート

/// タイトル一覧をクエリで絞り込む
pub trait FuzzyFilter: Send + Sync {
    /// 一致した要素の添字を、良く一致した順に返す
    fn filter(&self, query: &str, titles: &[&str]) -> Vec<usize>;
}
