//! prism 共通ライブラリ
//!
//! エラー型・Outbound ポート・標準アダプタ・実行時ディレクトリを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（実行時ディレクトリ等）
pub mod domain;

/// Outbound ポート（trait）
pub mod ports;

/// 標準アダプタ（Std*）
pub mod adapter;
