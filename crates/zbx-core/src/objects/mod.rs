//! Typed accessors, one per object kind.
//!
//! Every accessor is a thin handle around a shared [`Accessor`]. Which
//! capability traits it implements follows the kind's shape in the
//! [`ObjectKind`] table, and the associated schema types default to
//! [`Params`] for kinds without a dedicated schema.

use std::sync::Arc;

use zbx_types::{
    ActionCreate, ActionGet, ActionUpdate, AlertGet, EventGet, HistoryGet, HostCreate, HostGet,
    HostGroupCreate, HostGroupGet, HostGroupMassAdd, HostGroupMassRemove, HostGroupMassUpdate,
    HostGroupUpdate, HostMassAdd, HostMassRemove, HostMassUpdate, HostUpdate, ItemCreate, ItemGet,
    ItemUpdate, Params, TemplateCreate, TemplateGet, TemplateGroupCreate, TemplateGroupGet,
    TemplateGroupMassAdd, TemplateGroupMassRemove, TemplateGroupMassUpdate, TemplateGroupUpdate,
    TemplateMassAdd, TemplateMassRemove, TemplateMassUpdate, TemplateUpdate, TriggerCreate,
    TriggerGet, TriggerUpdate,
};

use crate::accessor::Accessor;
use crate::capability::{BatchMutable, ObjectApi, Readable, Updatable, Writable};
use crate::client::ZabbixClient;
use crate::kind::ObjectKind;

mod passthrough;

/// Expands to the given schema type, or [`Params`] when none is given.
macro_rules! schema {
    () => {
        Params
    };
    ($ty:ty) => {
        $ty
    };
}

/// Declares accessor structs and the matching `ZabbixClient` methods.
macro_rules! accessors {
    ($( $api:ident => $kind:ident, $method:ident; )*) => {
        $(
            #[doc = concat!("Accessor for `", stringify!($kind), "` objects.")]
            #[derive(Debug, Clone)]
            pub struct $api {
                accessor: Arc<Accessor>,
            }

            impl ObjectApi for $api {
                const KIND: ObjectKind = ObjectKind::$kind;

                fn from_accessor(accessor: Arc<Accessor>) -> Self {
                    Self { accessor }
                }

                fn accessor(&self) -> &Accessor {
                    &self.accessor
                }
            }
        )*

        impl ZabbixClient {
            $(
                #[must_use]
                pub fn $method(&self) -> $api {
                    self.api::<$api>()
                }
            )*
        }
    };
}

macro_rules! get_only {
    ($( $api:ident $(: $get:ty)? ),* $(,)?) => {
        $(
            impl Readable for $api {
                type Get = schema!($($get)?);
            }
        )*
    };
}

macro_rules! update_read {
    ($( $api:ident ),* $(,)?) => {
        $(
            impl Readable for $api {
                type Get = Params;
            }

            impl Updatable for $api {
                type Update = Params;
            }
        )*
    };
}

macro_rules! crud {
    ($( $api:ident $({ get: $get:ty, create: $create:ty, update: $update:ty })? ),* $(,)?) => {
        $(
            impl Readable for $api {
                type Get = schema!($($get)?);
            }

            impl Updatable for $api {
                type Update = schema!($($update)?);
            }

            impl Writable for $api {
                type Create = schema!($($create)?);
            }
        )*
    };
}

macro_rules! batch {
    ($( $api:ident { mass_add: $add:ty, mass_remove: $remove:ty, mass_update: $update:ty $(,)? } ),* $(,)?) => {
        $(
            impl BatchMutable for $api {
                type MassAdd = $add;
                type MassRemove = $remove;
                type MassUpdate = $update;
            }
        )*
    };
}

accessors! {
    ActionApi => Action, action;
    AlertApi => Alert, alert;
    ApiInfoApi => ApiInfo, api_info;
    AuditLogApi => AuditLog, audit_log;
    AuthenticationApi => Authentication, authentication;
    AutoregistrationApi => Autoregistration, autoregistration;
    ConfigurationApi => Configuration, configuration;
    ConnectorApi => Connector, connector;
    CorrelationApi => Correlation, correlation;
    DashboardApi => Dashboard, dashboard;
    DiscoveryCheckApi => DiscoveryCheck, discovery_check;
    DiscoveryHostApi => DiscoveryHost, discovery_host;
    DiscoveryRuleApi => DiscoveryRule, discovery_rule;
    DiscoveryServiceApi => DiscoveryService, discovery_service;
    EventApi => Event, event;
    GraphApi => Graph, graph;
    GraphItemApi => GraphItem, graph_item;
    GraphPrototypeApi => GraphPrototype, graph_prototype;
    HaNodeApi => HaNode, ha_node;
    HistoryApi => History, history;
    HostApi => Host, host;
    HostGroupApi => HostGroup, host_group;
    HostInterfaceApi => HostInterface, host_interface;
    HostPrototypeApi => HostPrototype, host_prototype;
    HousekeepingApi => Housekeeping, housekeeping;
    IconMapApi => IconMap, icon_map;
    ImageApi => Image, image;
    ItemApi => Item, item;
    ItemPrototypeApi => ItemPrototype, item_prototype;
    LldRuleApi => LldRule, lld_rule;
    MaintenanceApi => Maintenance, maintenance;
    MapApi => Map, map;
    MediaTypeApi => MediaType, media_type;
    ModuleApi => Module, module;
    ProblemApi => Problem, problem;
    ProxyApi => Proxy, proxy;
    RegularExpressionApi => RegularExpression, regular_expression;
    ReportApi => Report, report;
    RoleApi => Role, role;
    ScriptApi => Script, script;
    ServiceApi => Service, service;
    SettingsApi => Settings, settings;
    SlaApi => Sla, sla;
    TaskApi => Task, task;
    TemplateApi => Template, template;
    TemplateDashboardApi => TemplateDashboard, template_dashboard;
    TemplateGroupApi => TemplateGroup, template_group;
    TokenApi => Token, token;
    TrendApi => Trend, trend;
    TriggerApi => Trigger, trigger;
    TriggerPrototypeApi => TriggerPrototype, trigger_prototype;
    UserApi => User, user;
    UserDirectoryApi => UserDirectory, user_directory;
    UserGroupApi => UserGroup, user_group;
    UserMacroApi => UserMacro, user_macro;
    ValueMapApi => ValueMap, value_map;
    WebScenarioApi => WebScenario, web_scenario;
}

get_only! {
    AlertApi: AlertGet,
    AuditLogApi,
    DiscoveryCheckApi,
    DiscoveryHostApi,
    DiscoveryServiceApi,
    EventApi: EventGet,
    GraphItemApi,
    HaNodeApi,
    HistoryApi: HistoryGet,
    ProblemApi,
    TaskApi,
    TrendApi,
}

update_read! {
    AuthenticationApi,
    AutoregistrationApi,
    HousekeepingApi,
    SettingsApi,
}

crud! {
    ActionApi { get: ActionGet, create: ActionCreate, update: ActionUpdate },
    ConnectorApi,
    CorrelationApi,
    DashboardApi,
    DiscoveryRuleApi,
    GraphApi,
    GraphPrototypeApi,
    HostApi { get: HostGet, create: HostCreate, update: HostUpdate },
    HostGroupApi { get: HostGroupGet, create: HostGroupCreate, update: HostGroupUpdate },
    HostInterfaceApi,
    HostPrototypeApi,
    IconMapApi,
    ImageApi,
    ItemApi { get: ItemGet, create: ItemCreate, update: ItemUpdate },
    ItemPrototypeApi,
    LldRuleApi,
    MaintenanceApi,
    MapApi,
    MediaTypeApi,
    ModuleApi,
    ProxyApi,
    RegularExpressionApi,
    ReportApi,
    RoleApi,
    ScriptApi,
    ServiceApi,
    SlaApi,
    TemplateApi { get: TemplateGet, create: TemplateCreate, update: TemplateUpdate },
    TemplateDashboardApi,
    TemplateGroupApi { get: TemplateGroupGet, create: TemplateGroupCreate, update: TemplateGroupUpdate },
    TokenApi,
    TriggerApi { get: TriggerGet, create: TriggerCreate, update: TriggerUpdate },
    TriggerPrototypeApi,
    UserApi,
    UserDirectoryApi,
    UserGroupApi,
    UserMacroApi,
    ValueMapApi,
    WebScenarioApi,
}

batch! {
    HostApi { mass_add: HostMassAdd, mass_remove: HostMassRemove, mass_update: HostMassUpdate },
    HostGroupApi {
        mass_add: HostGroupMassAdd,
        mass_remove: HostGroupMassRemove,
        mass_update: HostGroupMassUpdate,
    },
    TemplateApi {
        mass_add: TemplateMassAdd,
        mass_remove: TemplateMassRemove,
        mass_update: TemplateMassUpdate,
    },
    TemplateGroupApi {
        mass_add: TemplateGroupMassAdd,
        mass_remove: TemplateGroupMassRemove,
        mass_update: TemplateGroupMassUpdate,
    },
}
