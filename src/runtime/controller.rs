//! Preview controller - owns the model and routes events through `update`

use chrono::NaiveDate;

use crate::commands::Cmd;
use crate::config::PreviewConfig;
use crate::messages::Msg;
use crate::model::AppModel;
use crate::update::update;
use crate::view::{self, RenderInstructions};

/// Owns the preview model for one form session.
///
/// Every input event goes through [`dispatch`](Self::dispatch); the host
/// carries out the returned command and calls [`render`](Self::render)
/// whenever the command asks for it.
#[derive(Debug)]
pub struct PreviewController {
    model: AppModel,
    today: NaiveDate,
}

impl PreviewController {
    /// Controller with the given configuration, dated today
    pub fn new(config: PreviewConfig) -> Self {
        Self::with_today(config, crate::util::date::today())
    }

    /// Controller with a fixed "today" for the last-updated fallback
    pub fn with_today(config: PreviewConfig, today: NaiveDate) -> Self {
        Self {
            model: AppModel::new(config),
            today,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    /// Apply one input event
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        update(&mut self.model, msg)
    }

    /// Apply a sequence of events, collecting the commands they produce
    pub fn dispatch_all(&mut self, msgs: impl IntoIterator<Item = Msg>) -> Vec<Cmd> {
        msgs.into_iter().filter_map(|msg| self.dispatch(msg)).collect()
    }

    /// Current render instruction set
    pub fn render(&self) -> RenderInstructions {
        view::render(&self.model, self.today)
    }

    /// Display fragment for the annotation markup alone
    pub fn markup_fragment(&self) -> String {
        self.model.markup_fragment()
    }
}

impl Default for PreviewController {
    fn default() -> Self {
        Self::new(PreviewConfig::default())
    }
}
