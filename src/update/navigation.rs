//! Page navigation update handler

use crate::commands::Cmd;
use crate::messages::NavigationMsg;
use crate::model::AppModel;

pub fn update_navigation(model: &mut AppModel, msg: NavigationMsg) -> Option<Cmd> {
    let moved = match msg {
        NavigationMsg::NextPage => model.preview.next_page(),
        NavigationMsg::PrevPage => model.preview.prev_page(),
        NavigationMsg::GoToPage(page) => model.preview.go_to_page(page),
    };

    if moved {
        tracing::debug!(
            "Preview page {} of {}",
            model.preview.current_page(),
            model.preview.total_pages()
        );
        Some(Cmd::Render)
    } else {
        None
    }
}
