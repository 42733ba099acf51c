use crate::input::{Action, TopGesture};
use crate::layout::PaneLayout;
use crate::model::{ContentSnapshot, Pane, ResourceName};
use crate::scroll::ScrollState;
use tracing::debug;

pub struct App {
    running: bool,
    focus: Pane,
    gesture: TopGesture,
    content: ContentSnapshot,
    pods: ScrollState,
    services: ScrollState,
    deployments: ScrollState,
    layout: PaneLayout,
    size: (u16, u16),
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            focus: Pane::Pods,
            gesture: TopGesture::Idle,
            content: ContentSnapshot::default(),
            pods: ScrollState::default(),
            services: ScrollState::default(),
            deployments: ScrollState::default(),
            layout: PaneLayout::default(),
            size: (0, 0),
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn active_pane(&self) -> Pane {
        self.focus
    }

    pub fn is_active(&self, pane: Pane) -> bool {
        self.focus == pane
    }

    #[cfg(test)]
    pub fn gesture(&self) -> TopGesture {
        self.gesture
    }

    pub fn context_text(&self) -> &str {
        &self.content.context
    }

    pub fn info_text(&self) -> &str {
        &self.content.info
    }

    pub fn layout(&self) -> &PaneLayout {
        &self.layout
    }

    pub fn scroll_state(&self, pane: Pane) -> Option<&ScrollState> {
        match pane {
            Pane::Pods => Some(&self.pods),
            Pane::Services => Some(&self.services),
            Pane::Deployments => Some(&self.deployments),
            Pane::Context | Pane::Info => None,
        }
    }

    fn scroll_state_mut(&mut self, pane: Pane) -> Option<&mut ScrollState> {
        match pane {
            Pane::Pods => Some(&mut self.pods),
            Pane::Services => Some(&mut self.services),
            Pane::Deployments => Some(&mut self.deployments),
            Pane::Context | Pane::Info => None,
        }
    }

    pub fn set_context(&mut self, cluster: &str, namespace: &str) {
        self.content.context = format!("{cluster}/{namespace}");
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.content.info = info.into();
    }

    pub fn set_pods<R: ResourceName>(&mut self, pods: &[R]) {
        self.pods.set_items(row_names(pods));
    }

    pub fn set_services<R: ResourceName>(&mut self, services: &[R]) {
        self.services.set_items(row_names(services));
    }

    pub fn set_deployments<R: ResourceName>(&mut self, deployments: &[R]) {
        self.deployments.set_items(row_names(deployments));
    }

    /// Recomputes pane geometry. Repeating the same size is a no-op.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.size == (width, height) {
            return;
        }
        debug!("resize {width}x{height}");
        self.size = (width, height);
        self.layout = PaneLayout::compute(width, height);
    }

    pub fn select_next(&mut self) {
        self.focus = self.focus.next();
        debug!("focus={}", self.focus);
    }

    pub fn select_previous(&mut self) {
        self.focus = self.focus.prev();
        debug!("focus={}", self.focus);
    }

    pub fn apply_action(&mut self, action: Action) {
        let jump_top = self.gesture.advance(Some(action));

        match action {
            Action::Quit => self.running = false,
            Action::NextPane => self.select_next(),
            Action::PrevPane => self.select_previous(),
            _ if action.is_scroll() => self.route_scroll(action, jump_top),
            _ => {}
        }
    }

    /// Input outside the key set. It does nothing except break a pending
    /// `g g`.
    pub fn discard_input(&mut self) {
        self.gesture.advance(None);
    }

    fn route_scroll(&mut self, action: Action, jump_top: bool) {
        let pane = self.focus;
        let rows = self.layout.visible_rows(pane);
        let Some(state) = self.scroll_state_mut(pane) else {
            debug!("dropping {action:?}: {pane} has no list");
            return;
        };

        match action {
            Action::Down => state.scroll_down(),
            Action::Up => state.scroll_up(),
            Action::HalfPageDown => state.scroll_half_page_down(rows),
            Action::HalfPageUp => state.scroll_half_page_up(rows),
            Action::PageDown => state.scroll_page_down(rows),
            Action::PageUp => state.scroll_page_up(rows),
            Action::TopPrefix if jump_top => state.scroll_top(),
            Action::Bottom => state.scroll_bottom(),
            _ => {}
        }
    }
}

fn row_names<R: ResourceName>(items: &[R]) -> Vec<String> {
    items.iter().map(ResourceName::resource_name).collect()
}

#[cfg(test)]
mod tests {
    use super::App;
    use crate::input::{Action, TopGesture};
    use crate::model::Pane;

    fn pod_names(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("pod-{index}")).collect()
    }

    fn app_with_lists() -> App {
        let mut app = App::new();
        app.resize(100, 40);
        app.set_context("my-service.cluster.local", "default");
        app.set_pods(&pod_names(14));
        app.set_services(&["front-app", "auth-app", "async-queue"]);
        app.set_deployments(&["front-app", "auth-app"]);
        app
    }

    fn selections(app: &App) -> Vec<Option<usize>> {
        Pane::LISTS
            .into_iter()
            .map(|pane| app.scroll_state(pane).and_then(|state| state.selected()))
            .collect()
    }

    #[test]
    fn starts_on_pods() {
        let app = App::new();
        assert_eq!(app.active_pane(), Pane::Pods);
        assert!(app.running());
    }

    #[test]
    fn next_pane_cycles_through_every_pane() {
        let mut app = App::new();
        let mut visited = Vec::new();
        for _ in 0..Pane::ALL.len() {
            app.apply_action(Action::NextPane);
            visited.push(app.active_pane());
        }
        assert_eq!(
            visited,
            vec![
                Pane::Services,
                Pane::Deployments,
                Pane::Info,
                Pane::Context,
                Pane::Pods
            ]
        );
    }

    #[test]
    fn next_then_prev_restores_focus() {
        let mut app = App::new();
        for _ in 0..Pane::ALL.len() {
            let start = app.active_pane();
            app.apply_action(Action::NextPane);
            app.apply_action(Action::PrevPane);
            assert_eq!(app.active_pane(), start);
            app.apply_action(Action::PrevPane);
            app.apply_action(Action::NextPane);
            assert_eq!(app.active_pane(), start);
            app.select_next();
        }
    }

    #[test]
    fn exactly_one_pane_is_active() {
        let mut app = App::new();
        for _ in 0..7 {
            let active = Pane::ALL
                .into_iter()
                .filter(|pane| app.is_active(*pane))
                .count();
            assert_eq!(active, 1);
            app.select_previous();
        }
    }

    #[test]
    fn context_text_joins_cluster_and_namespace() {
        let app = app_with_lists();
        assert_eq!(app.context_text(), "my-service.cluster.local/default");
    }

    #[test]
    fn scroll_goes_only_to_active_list() {
        let mut app = app_with_lists();
        app.apply_action(Action::Down);
        app.apply_action(Action::Down);
        app.apply_action(Action::NextPane);
        app.apply_action(Action::Bottom);
        assert_eq!(selections(&app), vec![Some(2), Some(2), Some(0)]);
    }

    #[test]
    fn scrolling_context_or_info_changes_nothing() {
        let mut app = app_with_lists();
        app.apply_action(Action::Down);
        let before = selections(&app);

        for pane in [Pane::Context, Pane::Info] {
            while app.active_pane() != pane {
                app.select_next();
            }
            for action in [
                Action::Down,
                Action::Up,
                Action::HalfPageDown,
                Action::HalfPageUp,
                Action::PageDown,
                Action::PageUp,
                Action::TopPrefix,
                Action::TopPrefix,
                Action::Bottom,
            ] {
                app.apply_action(action);
            }
            assert_eq!(selections(&app), before);
        }
    }

    #[test]
    fn pages_use_the_pane_height() {
        let mut app = app_with_lists();
        app.apply_action(Action::PageDown);
        assert_eq!(selections(&app)[0], Some(13));
        app.apply_action(Action::HalfPageUp);
        assert_eq!(selections(&app)[0], Some(6));

        app.set_pods(&pod_names(40));
        app.apply_action(Action::PageDown);
        assert_eq!(selections(&app)[0], Some(21));
        app.apply_action(Action::PageUp);
        assert_eq!(selections(&app)[0], Some(6));
    }

    #[test]
    fn single_top_press_leaves_selection() {
        let mut app = app_with_lists();
        app.apply_action(Action::Bottom);
        app.apply_action(Action::TopPrefix);
        assert_eq!(selections(&app)[0], Some(13));
        assert_eq!(app.gesture(), TopGesture::AwaitingConfirm);
    }

    #[test]
    fn double_top_press_jumps_to_first_row() {
        let mut app = app_with_lists();
        app.apply_action(Action::Bottom);
        app.apply_action(Action::TopPrefix);
        app.apply_action(Action::TopPrefix);
        assert_eq!(selections(&app)[0], Some(0));
        assert_eq!(app.gesture(), TopGesture::Idle);
    }

    #[test]
    fn interrupted_top_press_does_not_jump() {
        let mut app = app_with_lists();
        app.apply_action(Action::Bottom);
        app.apply_action(Action::TopPrefix);
        app.discard_input();
        app.apply_action(Action::TopPrefix);
        assert_eq!(selections(&app)[0], Some(13));

        app.apply_action(Action::Up);
        app.apply_action(Action::TopPrefix);
        app.apply_action(Action::NextPane);
        app.apply_action(Action::PrevPane);
        app.apply_action(Action::TopPrefix);
        assert_eq!(selections(&app)[0], Some(12));
    }

    #[test]
    fn shrinking_content_clamps_selection() {
        let mut app = app_with_lists();
        app.apply_action(Action::Bottom);
        app.set_pods(&pod_names(5));
        assert_eq!(selections(&app)[0], Some(4));
        app.set_pods::<String>(&[]);
        assert_eq!(selections(&app)[0], None);
        app.apply_action(Action::Down);
        assert_eq!(selections(&app)[0], None);
    }

    #[test]
    fn resize_keeps_selection_and_recomputes_layout() {
        let mut app = app_with_lists();
        app.apply_action(Action::Bottom);
        app.resize(300, 20);
        assert_eq!(app.layout().pods.width, 40);
        assert_eq!(app.layout().services.height, 0);
        assert_eq!(selections(&app)[0], Some(13));
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = App::new();
        app.apply_action(Action::Quit);
        assert!(!app.running());
    }
}
