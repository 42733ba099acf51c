use crate::model::Pane;
use ratatui::layout::Rect;

const MAX_NAV_WIDTH: u16 = 40;
const NAV_WIDTH_DIVISOR: u16 = 5;
const CONTEXT_HEIGHT: u16 = 3;
const PODS_HEIGHT: u16 = 17;
const SERVICES_HEIGHT: u16 = 10;

/// Pane rectangles for one terminal size.
///
/// The navigation column takes a fifth of the width (capped) and stacks
/// Context, Pods, Services and Deployments; Info fills the rest.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PaneLayout {
    pub context: Rect,
    pub pods: Rect,
    pub services: Rect,
    pub deployments: Rect,
    pub info: Rect,
}

impl PaneLayout {
    pub fn compute(width: u16, height: u16) -> Self {
        let nav = nav_width(width);
        let services_top = CONTEXT_HEIGHT + PODS_HEIGHT;
        let deployments_top = services_top + SERVICES_HEIGHT;

        Self {
            context: stacked(nav, height, 0, Some(CONTEXT_HEIGHT)),
            pods: stacked(nav, height, CONTEXT_HEIGHT, Some(PODS_HEIGHT)),
            services: stacked(nav, height, services_top, Some(SERVICES_HEIGHT)),
            deployments: stacked(nav, height, deployments_top, None),
            info: Rect::new(nav, 0, width.saturating_sub(nav), height),
        }
    }

    pub fn rect(&self, pane: Pane) -> Rect {
        match pane {
            Pane::Context => self.context,
            Pane::Pods => self.pods,
            Pane::Services => self.services,
            Pane::Deployments => self.deployments,
            Pane::Info => self.info,
        }
    }

    /// Rows available inside the pane's border.
    pub fn visible_rows(&self, pane: Pane) -> usize {
        self.rect(pane).height.saturating_sub(2) as usize
    }
}

pub fn nav_width(width: u16) -> u16 {
    (width / NAV_WIDTH_DIVISOR).min(MAX_NAV_WIDTH)
}

// A `None` budget takes whatever is left below `top`.
fn stacked(width: u16, term_height: u16, top: u16, budget: Option<u16>) -> Rect {
    let y = top.min(term_height);
    let remaining = term_height - y;
    let height = budget.map_or(remaining, |budget| budget.min(remaining));
    Rect::new(0, y, width, height)
}
