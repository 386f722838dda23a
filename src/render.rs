use crate::i18n::{Lang, Message};
use crate::models::StockCandidate;
use chrono::{DateTime, Days, Local, NaiveDate};

pub const DETAIL_ROUTE: &str = "/retirada_estoque";

/// Everything the renderer needs besides the candidates themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub lang: Lang,
    pub static_img_prefix: String,
    pub today: NaiveDate,
}

impl RenderContext {
    pub fn new(lang: Lang, static_img_prefix: impl Into<String>) -> Self {
        Self {
            lang,
            static_img_prefix: static_img_prefix.into(),
            today: Local::now().date_naive(),
        }
    }
}

/// One-way navigation to the withdrawal detail of a stock line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    path: String,
}

impl Navigation {
    pub fn detail(id: i64) -> Self {
        Self {
            path: format!("{DETAIL_ROUTE}/{id}"),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Expired,
    Urgent,
    Soon,
    Ok,
    Unknown,
}

impl ExpiryStatus {
    /// Expired before today, urgent within 7 days, soon within 15.
    pub fn classify(expiry_timestamp: Option<i64>, today: NaiveDate) -> Self {
        let Some(expiry) = expiry_timestamp
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.with_timezone(&Local).date_naive())
        else {
            return ExpiryStatus::Unknown;
        };

        if expiry < today {
            ExpiryStatus::Expired
        } else if today.checked_add_days(Days::new(7)).is_some_and(|limit| expiry < limit) {
            ExpiryStatus::Urgent
        } else if today.checked_add_days(Days::new(15)).is_some_and(|limit| expiry < limit) {
            ExpiryStatus::Soon
        } else {
            ExpiryStatus::Ok
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "vencido",
            ExpiryStatus::Urgent => "vence-urgente",
            ExpiryStatus::Soon => "vence-proximo",
            ExpiryStatus::Ok => "ok",
            ExpiryStatus::Unknown => "sem-data",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub name: String,
    /// "Lote: L1" when the first candidate has a batch.
    pub extra: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionControl {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub aria_label: String,
    pub status: ExpiryStatus,
    pub navigation: Navigation,
}

impl OptionControl {
    pub fn label(&self) -> String {
        format!("{} — {}", self.title, self.subtitle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionsBody {
    Notice(String),
    Controls(Vec<OptionControl>),
}

/// Rendered contents of the selection view. Built from scratch on every
/// lookup, so a new rendering always replaces the previous one whole.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionView {
    pub preview: Option<Preview>,
    pub body: OptionsBody,
}

impl SelectionView {
    pub fn controls(&self) -> &[OptionControl] {
        match &self.body {
            OptionsBody::Controls(controls) => controls,
            OptionsBody::Notice(_) => &[],
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.body {
            OptionsBody::Notice(text) => Some(text),
            OptionsBody::Controls(_) => None,
        }
    }
}

pub fn render_candidates(candidates: &[StockCandidate], ctx: &RenderContext) -> SelectionView {
    let Some(first) = candidates.first() else {
        return SelectionView {
            preview: None,
            body: OptionsBody::Notice(ctx.lang.text(Message::NoStock).to_string()),
        };
    };

    let units = ctx.lang.text(Message::Units);
    let controls = candidates
        .iter()
        .map(|candidate| {
            let quantity = candidate.quantity_or_zero();
            OptionControl {
                id: candidate.id,
                title: candidate.expiry_label.clone(),
                subtitle: format!("{quantity} {units}"),
                aria_label: format!(
                    "{} - {} - {quantity} {units}",
                    candidate.product_name, candidate.expiry_label
                ),
                status: ExpiryStatus::classify(candidate.expiry_timestamp, ctx.today),
                navigation: Navigation::detail(candidate.id),
            }
        })
        .collect();

    SelectionView {
        preview: Some(render_preview(first, ctx)),
        body: OptionsBody::Controls(controls),
    }
}

fn render_preview(candidate: &StockCandidate, ctx: &RenderContext) -> Preview {
    let extra = candidate
        .batch
        .as_deref()
        .filter(|batch| !batch.trim().is_empty())
        .map(|batch| format!("{}: {batch}", ctx.lang.text(Message::Batch)));

    Preview {
        name: candidate.product_name.clone(),
        extra,
        image: candidate
            .image_path
            .as_deref()
            .and_then(|path| resolve_image_path(path, &ctx.static_img_prefix)),
    }
}

/// Relative image paths live under the static prefix; absolute and
/// root-relative paths are used as-is.
pub fn resolve_image_path(path: &str, prefix: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http") || path.starts_with('/') {
        return Some(path.to_string());
    }
    Some(format!("{prefix}{path}"))
}
