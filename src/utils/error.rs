use thiserror::Error;

#[derive(Error, Debug)]
pub enum TesterError {
    #[error("连接失败\n请检查服务地址是否正确，或服务是否已启动。")]
    Connection,

    #[error("请求超时（10秒）")]
    Timeout,

    #[error("请求异常:\n{0}")]
    Transport(String),

    #[error("未知错误:\n{0}")]
    Unknown(String),

    #[error("{0}")]
    MissingField(String),
}

impl TesterError {
    pub fn category(&self) -> &'static str {
        match self {
            TesterError::Connection => "connection",
            TesterError::Timeout => "timeout",
            TesterError::Transport(_) => "transport",
            TesterError::Unknown(_) => "unknown",
            TesterError::MissingField(_) => "validation",
        }
    }
}

// 連接類錯誤先於超時判斷：連不上的主機一律算連接失敗
impl From<reqwest::Error> for TesterError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            TesterError::Connection
        } else if e.is_timeout() {
            TesterError::Timeout
        } else {
            TesterError::Transport(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, TesterError>;
