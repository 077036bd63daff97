use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Original,
    Rewrite,
}

impl Mode {
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Original => "原创文案生成",
            Mode::Rewrite => "爆款笔记改写",
        }
    }

    pub fn input_label(&self) -> &'static str {
        match self {
            Mode::Original => "文案主题/关键词",
            Mode::Rewrite => "原始爆款文案",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Mode::Original => "例如：大学生如何从0攒到1万、月薪3k理财攻略、宝妈兼职收益...",
            Mode::Rewrite => "将想要改写的爆款文案粘贴在这里...",
        }
    }
}

/// Randomness knobs forwarded untouched to the hosted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Idle,
    Loading,
    Error,
    Success,
}

#[derive(Deserialize, Clone)]
pub struct ModeRequest {
    pub mode: Mode,
}

#[derive(Deserialize, Clone)]
pub struct InputRequest {
    pub input: String,
}

#[derive(Deserialize, Clone, Default)]
pub struct GenerateRequest {
    pub input: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModeLabels {
    pub title: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
}

impl From<Mode> for ModeLabels {
    fn from(mode: Mode) -> Self {
        Self {
            title: mode.title(),
            input_label: mode.input_label(),
            placeholder: mode.placeholder(),
        }
    }
}

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StudioSnapshot {
    pub mode: Mode,
    pub input: String,
    pub output: String,
    pub loading: bool,
    pub error: Option<String>,
    pub copied: bool,
    pub status: Status,
    pub request_id: Option<String>,
    pub generated_at: Option<String>,
    pub labels: ModeLabels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clipboard: Option<String>,
}
