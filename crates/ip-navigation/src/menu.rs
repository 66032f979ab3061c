//! Side menu of the main layout

use ip_models::MenuItem;

use crate::name::RouteName;
use crate::table::RouteTable;

enum Entry {
    Group {
        key: &'static str,
        label: &'static str,
        icon: Option<&'static str>,
        children: &'static [Entry],
    },
    Leaf(RouteName),
}

use Entry::{Group, Leaf};

const MENU: &[Entry] = &[
    Group {
        key: "all-projects",
        label: "All Projects",
        icon: Some("folder"),
        children: &[
            Group {
                key: "project-declaration-group",
                label: "Project Declaration",
                icon: None,
                children: &[
                    Leaf(RouteName::ProjectDeclaration),
                    Leaf(RouteName::ProjectApproval),
                    Leaf(RouteName::ProjectTransfer),
                    Leaf(RouteName::ProjectReturned),
                    Leaf(RouteName::ProjectAbnormal),
                ],
            },
            Group {
                key: "progress-report-group",
                label: "Progress Report",
                icon: None,
                children: &[
                    Leaf(RouteName::ProgressReport),
                    Leaf(RouteName::ProgressAudit),
                    Leaf(RouteName::ProgressQuery),
                    Leaf(RouteName::ProgressWarning),
                    Leaf(RouteName::ProgressStatistics),
                ],
            },
            Group {
                key: "project-browse-group",
                label: "Project Browse",
                icon: None,
                children: &[
                    Leaf(RouteName::ProjectBrowse),
                    Leaf(RouteName::ProjectBrowseLevel),
                    Leaf(RouteName::ProjectBrowseDistrict),
                    Leaf(RouteName::ProjectBrowseHistory),
                ],
            },
            Leaf(RouteName::ProjectStatistics),
            Leaf(RouteName::ProjectCoordination),
        ],
    },
    Group {
        key: "planning-reserve",
        label: "Planning Reserve",
        icon: Some("bulb"),
        children: &[Leaf(RouteName::PlanningPreparation)],
    },
    Group {
        key: "geographic-info",
        label: "Geographic Info",
        icon: Some("environment"),
        children: &[Leaf(RouteName::GeographicMap)],
    },
    Group {
        key: "sms-management",
        label: "SMS Management",
        icon: Some("message"),
        children: &[Leaf(RouteName::SmsSettings)],
    },
];

impl RouteTable {
    /// Menu tree with one group per functional area
    ///
    /// Leaves are keyed by route name. Routes missing from the table are
    /// left out, and so are groups that end up empty.
    pub fn menu(&self) -> Vec<MenuItem> {
        build(self, MENU)
    }
}

fn build(table: &RouteTable, entries: &[Entry]) -> Vec<MenuItem> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            Leaf(name) if table.contains(*name) => Some(MenuItem::leaf(name.as_str(), name.title())),
            Leaf(_) => None,
            Group {
                key,
                label,
                icon,
                children,
            } => {
                let children = build(table, children);
                if children.is_empty() {
                    return None;
                }
                let group = MenuItem::group(*key, *label, children);
                Some(match icon {
                    Some(icon) => group.with_icon(*icon),
                    None => group,
                })
            }
        })
        .collect()
}
