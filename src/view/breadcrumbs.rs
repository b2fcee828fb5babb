use crate::constants::{PATH_SEPARATOR, ROOT_PATH};
use crate::route::{self, RouteId};

/// One prefix of the current path. The current node itself is label-only:
/// it marks "you are here".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub route: Option<RouteId>,
}

impl Breadcrumb {
    pub fn is_navigable(&self) -> bool {
        self.route.is_some()
    }
}

/// Derive the ordered crumb trail for a path: one entry per prefix, each
/// linking to that prefix's route, the last one non-navigable.
pub fn resolve(path: &str) -> Vec<Breadcrumb> {
    if path == ROOT_PATH {
        return vec![Breadcrumb {
            label: ROOT_PATH.to_string(),
            route: None,
        }];
    }

    let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
    let last = segments.len() - 1;
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            // The leading empty segment of an absolute path is the root crumb
            let label = if i == 0 {
                ROOT_PATH.to_string()
            } else {
                segment.to_string()
            };
            let route = if i == last {
                None
            } else if i == 0 {
                Some(route::encode(ROOT_PATH))
            } else {
                Some(route::encode(&segments[..=i].join(PATH_SEPARATOR)))
            };
            Breadcrumb { label, route }
        })
        .collect()
}
