//! The table of remote object kinds.
//!
//! Each kind has an API namespace, a capability shape and possibly a few
//! extra operations. The table drives method naming, memoization and the
//! operation listing used by tooling.

use std::fmt;
use std::str::FromStr;

use crate::accessor::Operation;

/// The generic operation set a kind supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `get` only.
    Get,
    /// `get` and `update`.
    UpdateRead,
    /// `get`, `create`, `update`, `delete`.
    Crud,
    /// CRUD plus `massadd`, `massremove`, `massupdate`.
    Batch,
}

impl Shape {
    #[must_use]
    pub const fn operations(self) -> &'static [Operation] {
        match self {
            Shape::Get => &[Operation::Get],
            Shape::UpdateRead => &[Operation::Get, Operation::Update],
            Shape::Crud => &[
                Operation::Get,
                Operation::Create,
                Operation::Update,
                Operation::Delete,
            ],
            Shape::Batch => &[
                Operation::Get,
                Operation::Create,
                Operation::Update,
                Operation::Delete,
                Operation::MassAdd,
                Operation::MassRemove,
                Operation::MassUpdate,
            ],
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Get => "get",
            Shape::UpdateRead => "update-read",
            Shape::Crud => "crud",
            Shape::Batch => "batch",
        };
        f.write_str(name)
    }
}

macro_rules! object_kinds {
    ($( $kind:ident => $name:literal, $shape:expr, [$($extra:literal),* $(,)?]; )*) => {
        /// A remote object kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ObjectKind {
            $($kind,)*
        }

        impl ObjectKind {
            /// Every kind, in table order.
            pub const ALL: &'static [ObjectKind] = &[$(ObjectKind::$kind,)*];

            /// The API namespace used as the method prefix.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(ObjectKind::$kind => $name,)*
                }
            }

            /// The generic operation set, or `None` for kinds that only
            /// expose special operations.
            #[must_use]
            pub const fn shape(self) -> Option<Shape> {
                match self {
                    $(ObjectKind::$kind => $shape,)*
                }
            }

            /// Operations outside the generic shape.
            #[must_use]
            pub const fn extra_operations(self) -> &'static [&'static str] {
                match self {
                    $(ObjectKind::$kind => &[$($extra),*],)*
                }
            }
        }
    };
}

object_kinds! {
    Action => "action", Some(Shape::Crud), [];
    Alert => "alert", Some(Shape::Get), [];
    ApiInfo => "apiinfo", None, ["version"];
    AuditLog => "auditlog", Some(Shape::Get), [];
    Authentication => "authentication", Some(Shape::UpdateRead), [];
    Autoregistration => "autoregistration", Some(Shape::UpdateRead), [];
    Configuration => "configuration", None, ["export", "import", "importcompare"];
    Connector => "connector", Some(Shape::Crud), [];
    Correlation => "correlation", Some(Shape::Crud), [];
    Dashboard => "dashboard", Some(Shape::Crud), [];
    DiscoveryCheck => "dcheck", Some(Shape::Get), [];
    DiscoveryHost => "dhost", Some(Shape::Get), [];
    DiscoveryRule => "drule", Some(Shape::Crud), [];
    DiscoveryService => "dservice", Some(Shape::Get), [];
    Event => "event", Some(Shape::Get), ["acknowledge"];
    Graph => "graph", Some(Shape::Crud), [];
    GraphItem => "graphitem", Some(Shape::Get), [];
    GraphPrototype => "graphprototype", Some(Shape::Crud), [];
    HaNode => "hanode", Some(Shape::Get), [];
    History => "history", Some(Shape::Get), ["clear"];
    Host => "host", Some(Shape::Batch), [];
    HostGroup => "hostgroup", Some(Shape::Batch), ["propagate"];
    HostInterface => "hostinterface", Some(Shape::Crud), ["massadd", "massremove", "replacehostinterfaces"];
    HostPrototype => "hostprototype", Some(Shape::Crud), [];
    Housekeeping => "housekeeping", Some(Shape::UpdateRead), [];
    IconMap => "iconmap", Some(Shape::Crud), [];
    Image => "image", Some(Shape::Crud), [];
    Item => "item", Some(Shape::Crud), [];
    ItemPrototype => "itemprototype", Some(Shape::Crud), [];
    LldRule => "discoveryrule", Some(Shape::Crud), ["copy"];
    Maintenance => "maintenance", Some(Shape::Crud), [];
    Map => "map", Some(Shape::Crud), [];
    MediaType => "mediatype", Some(Shape::Crud), [];
    Module => "module", Some(Shape::Crud), [];
    Problem => "problem", Some(Shape::Get), [];
    Proxy => "proxy", Some(Shape::Crud), [];
    RegularExpression => "regexp", Some(Shape::Crud), [];
    Report => "report", Some(Shape::Crud), [];
    Role => "role", Some(Shape::Crud), [];
    Script => "script", Some(Shape::Crud), ["execute", "getscriptsbyevents", "getscriptsbyhosts"];
    Service => "service", Some(Shape::Crud), [];
    Settings => "settings", Some(Shape::UpdateRead), [];
    Sla => "sla", Some(Shape::Crud), ["getsli"];
    Task => "task", Some(Shape::Get), ["create"];
    Template => "template", Some(Shape::Batch), [];
    TemplateDashboard => "templatedashboard", Some(Shape::Crud), [];
    TemplateGroup => "templategroup", Some(Shape::Batch), ["propagate"];
    Token => "token", Some(Shape::Crud), ["generate"];
    Trend => "trend", Some(Shape::Get), [];
    Trigger => "trigger", Some(Shape::Crud), [];
    TriggerPrototype => "triggerprototype", Some(Shape::Crud), [];
    User => "user", Some(Shape::Crud), ["login", "logout", "provision", "unblock"];
    UserDirectory => "userdirectory", Some(Shape::Crud), ["test"];
    UserGroup => "usergroup", Some(Shape::Crud), [];
    UserMacro => "usermacro", Some(Shape::Crud), ["createglobal", "updateglobal", "deleteglobal"];
    ValueMap => "valuemap", Some(Shape::Crud), [];
    WebScenario => "httptest", Some(Shape::Crud), [];
}

impl ObjectKind {
    /// Whether the owning client caches a single accessor for this kind.
    ///
    /// Items and item prototypes are handed out fresh on every access.
    #[must_use]
    pub const fn memoized(self) -> bool {
        !matches!(self, ObjectKind::Item | ObjectKind::ItemPrototype)
    }

    /// Full JSON-RPC method name for `operation`.
    #[must_use]
    pub fn method(self, operation: &str) -> String {
        format!("{}.{operation}", self.name())
    }

    /// Every operation suffix this kind supports: its shape's operations
    /// followed by its extra operations.
    #[must_use]
    pub fn operations(self) -> Vec<&'static str> {
        let generic = self
            .shape()
            .map_or(&[][..], Shape::operations)
            .iter()
            .map(|op| op.suffix());
        generic.chain(self.extra_operations().iter().copied()).collect()
    }

    #[must_use]
    pub fn supports(self, operation: &str) -> bool {
        self.operations().contains(&operation)
    }

    /// Key under which `create` reports the new ids.
    #[must_use]
    pub fn id_field(self) -> String {
        let field = match self {
            ObjectKind::ItemPrototype | ObjectKind::LldRule => "itemids",
            ObjectKind::TriggerPrototype => "triggerids",
            ObjectKind::GraphPrototype => "graphids",
            ObjectKind::HostPrototype => "hostids",
            ObjectKind::HostGroup | ObjectKind::TemplateGroup => "groupids",
            ObjectKind::HostInterface => "interfaceids",
            ObjectKind::Map => "sysmapids",
            ObjectKind::TemplateDashboard => "dashboardids",
            ObjectKind::UserGroup => "usrgrpids",
            ObjectKind::UserMacro => "hostmacroids",
            _ => return format!("{}ids", self.name()),
        };
        field.to_string()
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown object kind: {0}")]
pub struct UnknownObjectKind(pub String);

impl FromStr for ObjectKind {
    type Err = UnknownObjectKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownObjectKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = ObjectKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), ObjectKind::ALL.len());
    }

    #[test]
    fn test_from_str_round_trips_every_kind() {
        for kind in ObjectKind::ALL {
            assert_eq!(kind.name().parse::<ObjectKind>(), Ok(*kind));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "discovery_check".parse::<ObjectKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown object kind: discovery_check");
    }

    #[test]
    fn test_method_name() {
        assert_eq!(ObjectKind::Host.method("get"), "host.get");
        assert_eq!(ObjectKind::HostGroup.method("massadd"), "hostgroup.massadd");
        assert_eq!(ObjectKind::WebScenario.method("create"), "httptest.create");
    }

    #[test]
    fn test_operations_by_shape() {
        assert_eq!(ObjectKind::Alert.operations(), vec!["get"]);
        assert_eq!(ObjectKind::Settings.operations(), vec!["get", "update"]);
        assert_eq!(
            ObjectKind::Action.operations(),
            vec!["get", "create", "update", "delete"]
        );
        assert_eq!(
            ObjectKind::Host.operations(),
            vec![
                "get",
                "create",
                "update",
                "delete",
                "massadd",
                "massremove",
                "massupdate"
            ]
        );
    }

    #[test]
    fn test_operations_include_extras() {
        assert_eq!(ObjectKind::ApiInfo.operations(), vec!["version"]);
        assert_eq!(ObjectKind::Task.operations(), vec!["get", "create"]);
        assert!(ObjectKind::HostGroup.supports("propagate"));
        assert!(ObjectKind::Event.supports("acknowledge"));
    }

    #[test]
    fn test_host_interface_has_no_massupdate() {
        assert!(ObjectKind::HostInterface.supports("massadd"));
        assert!(ObjectKind::HostInterface.supports("massremove"));
        assert!(!ObjectKind::HostInterface.supports("massupdate"));
    }

    #[test]
    fn test_operations_have_no_duplicates() {
        for kind in ObjectKind::ALL {
            let ops = kind.operations();
            let unique: HashSet<_> = ops.iter().collect();
            assert_eq!(unique.len(), ops.len(), "duplicate operation on {kind}");
        }
    }

    #[test]
    fn test_memoized() {
        assert!(ObjectKind::Host.memoized());
        assert!(!ObjectKind::Item.memoized());
        assert!(!ObjectKind::ItemPrototype.memoized());
        assert_eq!(
            ObjectKind::ALL.iter().filter(|k| !k.memoized()).count(),
            2
        );
    }

    #[test]
    fn test_id_field() {
        assert_eq!(ObjectKind::Host.id_field(), "hostids");
        assert_eq!(ObjectKind::ItemPrototype.id_field(), "itemids");
        assert_eq!(ObjectKind::TriggerPrototype.id_field(), "triggerids");
        assert_eq!(ObjectKind::GraphPrototype.id_field(), "graphids");
        assert_eq!(ObjectKind::UserGroup.id_field(), "usrgrpids");
        assert_eq!(ObjectKind::TemplateGroup.id_field(), "groupids");
        assert_eq!(ObjectKind::WebScenario.id_field(), "httptestids");
    }
}
