//! Operations outside the generic shapes.
//!
//! Each one forwards its params unchanged to `<kind>.<operation>`.

use serde::Serialize;
use serde_json::Value;
use zbx_rpc::Result;
use zbx_types::{
    ConfigurationExport, ConfigurationImport, EventAcknowledge, HostGroupPropagate,
    TemplateGroupPropagate, UserLogin,
};

use super::{
    ApiInfoApi, ConfigurationApi, EventApi, HistoryApi, HostGroupApi, HostInterfaceApi,
    LldRuleApi, ScriptApi, SlaApi, TaskApi, TemplateGroupApi, TokenApi, UserApi,
    UserDirectoryApi, UserMacroApi,
};
use crate::accessor::Ids;
use crate::capability::ObjectApi;

/// Untyped special operations taking caller-supplied params.
macro_rules! passthrough {
    ($api:ident { $( $fn_name:ident => $op:literal ),* $(,)? }) => {
        impl $api {
            $(
                #[doc = concat!("Call `", $op, "` with `params` as given.")]
                ///
                /// # Errors
                ///
                /// Returns any transport or API error unchanged.
                pub async fn $fn_name<P>(&self, params: &P) -> Result<Value>
                where
                    P: Serialize + ?Sized + Sync,
                {
                    self.accessor().call($op, params).await
                }
            )*
        }
    };
}

fn no_params() -> Value {
    Value::Array(Vec::new())
}

impl ApiInfoApi {
    /// Server API version. Sent without the bearer token, which the server
    /// refuses for this method.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn version(&self) -> Result<Value> {
        self.accessor()
            .dispatch_unauthenticated("version", no_params())
            .await
    }
}

impl ConfigurationApi {
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn export(&self, params: &ConfigurationExport) -> Result<Value> {
        self.accessor().call("export", params).await
    }

    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn import(&self, params: &ConfigurationImport) -> Result<Value> {
        self.accessor().call("import", params).await
    }

    /// Preview the changes `import` would make.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn import_compare(&self, params: &ConfigurationImport) -> Result<Value> {
        self.accessor().call("importcompare", params).await
    }
}

impl EventApi {
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn acknowledge(&self, params: &EventAcknowledge) -> Result<Value> {
        self.accessor().call("acknowledge", params).await
    }
}

impl HistoryApi {
    /// Drop all history of the given items.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn clear(&self, itemids: impl Into<Ids>) -> Result<Value> {
        let itemids: Ids = itemids.into();
        self.accessor().call("clear", &itemids).await
    }
}

impl HostGroupApi {
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn propagate(&self, params: &HostGroupPropagate) -> Result<Value> {
        self.accessor().call("propagate", params).await
    }
}

impl TemplateGroupApi {
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn propagate(&self, params: &TemplateGroupPropagate) -> Result<Value> {
        self.accessor().call("propagate", params).await
    }
}

passthrough!(HostInterfaceApi {
    mass_add => "massadd",
    mass_remove => "massremove",
    replace_host_interfaces => "replacehostinterfaces",
});

passthrough!(LldRuleApi {
    copy => "copy",
});

passthrough!(ScriptApi {
    execute => "execute",
    get_scripts_by_events => "getscriptsbyevents",
    get_scripts_by_hosts => "getscriptsbyhosts",
});

passthrough!(SlaApi {
    get_sli => "getsli",
});

passthrough!(TaskApi {
    create => "create",
});

passthrough!(UserDirectoryApi {
    test => "test",
});

passthrough!(UserMacroApi {
    create_global => "createglobal",
    update_global => "updateglobal",
});

impl TokenApi {
    /// Generate secrets for the given tokens.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn generate(&self, tokenids: impl Into<Ids>) -> Result<Value> {
        let tokenids: Ids = tokenids.into();
        self.accessor().call("generate", &tokenids).await
    }
}

impl UserMacroApi {
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn delete_global(&self, globalmacroids: impl Into<Ids>) -> Result<Value> {
        let globalmacroids: Ids = globalmacroids.into();
        self.accessor().call("deleteglobal", &globalmacroids).await
    }
}

impl UserApi {
    /// Log in and return the raw result: a session id, or an object when
    /// `userData` is requested.
    ///
    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn login(&self, params: &UserLogin) -> Result<Value> {
        self.accessor().call("login", params).await
    }

    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn logout(&self) -> Result<Value> {
        self.accessor().dispatch("logout", no_params()).await
    }

    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn provision(&self, userids: impl Into<Ids>) -> Result<Value> {
        let userids: Ids = userids.into();
        self.accessor().call("provision", &userids).await
    }

    /// # Errors
    ///
    /// Returns any transport or API error unchanged.
    pub async fn unblock(&self, userids: impl Into<Ids>) -> Result<Value> {
        let userids: Ids = userids.into();
        self.accessor().call("unblock", &userids).await
    }
}
