//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

/// エラー種別の列挙体
///
/// クライアントに返すエラーの分類を定義します。
/// 重複登録と認証情報の誤りは意図的に 400 を返します
/// （401 は Bearer トークンの検証失敗にのみ使用）。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - 必須項目の欠落・不正な入力
    InvalidInput,
    /// 400 - 既存データとの競合（重複登録など）
    Conflict,
    /// 400 - メールアドレスまたはパスワードの誤り（原因は区別しない）
    InvalidCredentials,
    /// 401 - トークンが無い・無効・期限切れ
    Unauthenticated,
    /// 404 - リソースが見つからない
    NotFound,
    /// 500 - ストア障害などサーバー内部エラー
    Internal,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidInput.status_code(), 400);
    /// assert_eq!(ErrorKind::InvalidCredentials.status_code(), 400);
    /// assert_eq!(ErrorKind::Internal.status_code(), 500);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::InvalidInput | ErrorKind::Conflict | ErrorKind::InvalidCredentials => 400,
            ErrorKind::Unauthenticated => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }

    /// ログ用の文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InvalidCredentials => "Invalid Credentials",
            ErrorKind::Unauthenticated => "Unauthenticated",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Internal => "Internal",
        }
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx系のエラーは `true` を返します。
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
