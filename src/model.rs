use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Pod, Service};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Pane {
    Context,
    Pods,
    Services,
    Deployments,
    Info,
}

impl Pane {
    /// Focus cycle order. `next`/`prev` index into this table, so a new pane
    /// only has to be added here to join the cycle.
    pub const ALL: [Self; 5] = [
        Self::Context,
        Self::Pods,
        Self::Services,
        Self::Deployments,
        Self::Info,
    ];

    pub const LISTS: [Self; 3] = [Self::Pods, Self::Services, Self::Deployments];

    fn position(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Context => "Cluster/namespace",
            Self::Pods => "Pods",
            Self::Services => "Services",
            Self::Deployments => "Deployments",
            Self::Info => "Info",
        }
    }

    pub fn is_scrollable(self) -> bool {
        matches!(self, Self::Pods | Self::Services | Self::Deployments)
    }
}

impl Display for Pane {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ContentSnapshot {
    pub context: String,
    pub info: String,
}

/// Anything that can be listed as a row in one of the resource panes.
pub trait ResourceName {
    fn resource_name(&self) -> String;
}

impl ResourceName for Pod {
    fn resource_name(&self) -> String {
        self.metadata.name.clone().unwrap_or_default()
    }
}

impl ResourceName for Service {
    fn resource_name(&self) -> String {
        self.metadata.name.clone().unwrap_or_default()
    }
}

impl ResourceName for Deployment {
    fn resource_name(&self) -> String {
        self.metadata.name.clone().unwrap_or_default()
    }
}

impl ResourceName for String {
    fn resource_name(&self) -> String {
        self.clone()
    }
}

impl ResourceName for &str {
    fn resource_name(&self) -> String {
        (*self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Pane, ResourceName};
    use k8s_openapi::api::core::v1::Pod;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    #[test]
    fn next_visits_every_pane_once_per_cycle() {
        let mut pane = Pane::Context;
        let mut visited = Vec::new();
        for _ in 0..Pane::ALL.len() {
            visited.push(pane);
            pane = pane.next();
        }
        assert_eq!(visited, Pane::ALL.to_vec());
        assert_eq!(pane, Pane::Context);
    }

    #[test]
    fn next_and_prev_are_inverse() {
        for pane in Pane::ALL {
            assert_eq!(pane.next().prev(), pane);
            assert_eq!(pane.prev().next(), pane);
        }
    }

    #[test]
    fn cycle_wraps_at_both_ends() {
        assert_eq!(Pane::Info.next(), Pane::Context);
        assert_eq!(Pane::Context.prev(), Pane::Info);
    }

    #[test]
    fn only_list_panes_scroll() {
        let scrollable = Pane::ALL
            .into_iter()
            .filter(|pane| pane.is_scrollable())
            .collect::<Vec<_>>();
        assert_eq!(scrollable, Pane::LISTS.to_vec());
    }

    #[test]
    fn pod_rows_use_metadata_name() {
        let pod = Pod {
            metadata: ObjectMeta {
                name: Some("web-0".to_string()),
                ..ObjectMeta::default()
            },
            ..Pod::default()
        };
        assert_eq!(pod.resource_name(), "web-0");
        assert_eq!(Pod::default().resource_name(), "");
    }
}
