//! Shared fixtures: a scripted stand-in for the external tool and an
//! in-memory parameter store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::Mutex;
use strata_core::{BackendConfig, DeployConfig, ToolConfig};
use strata_deploy::{DeployError, ParameterStore, ToolRunner};
use tempfile::TempDir;

/// In-memory parameter store recording every lookup.
pub struct MemoryStore {
    params: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new(params: &[(&str, &str)]) -> Self {
        Self {
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ParameterStore for MemoryStore {
    async fn get_parameter(&self, name: &str) -> strata_deploy::Result<String> {
        self.calls.lock().unwrap().push(name.to_string());
        self.params
            .get(name)
            .cloned()
            .ok_or_else(|| DeployError::ParameterLookup {
                name: name.to_string(),
                message: "parameter not found".to_string(),
            })
    }
}

/// A project directory with a scripted fake tool.
///
/// The script logs every invocation to `invocations.log`, honours the
/// `-out=` flag the way the real tool does, and exits with the
/// configured codes for the plan and apply verbs (0 for everything
/// else).
pub struct TestProject {
    root: TempDir,
}

impl TestProject {
    pub fn new(plan_exit: i32, apply_exit: i32) -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("module")).unwrap();

        let log = root.path().join("invocations.log");
        let script = format!(
            "#!/bin/sh\n\
             echo \"$*\" >> \"{log}\"\n\
             case \"$1\" in\n\
               plan)\n\
                 for arg in \"$@\"; do\n\
                   case \"$arg\" in\n\
                     -out=*) : > \"${{arg#-out=}}\" ;;\n\
                   esac\n\
                 done\n\
                 echo \"plan output\"\n\
                 echo \"plan diagnostics\" >&2\n\
                 exit {plan_exit}\n\
                 ;;\n\
               apply)\n\
                 echo \"apply output\"\n\
                 echo \"apply diagnostics\" >&2\n\
                 exit {apply_exit}\n\
                 ;;\n\
               *)\n\
                 exit 0\n\
                 ;;\n\
             esac\n",
            log = log.display(),
        );

        let tool = root.path().join("faketool");
        fs::write(&tool, script).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        Self { root }
    }

    pub fn tool_path(&self) -> PathBuf {
        self.root.path().join("faketool")
    }

    pub fn module_dir(&self) -> PathBuf {
        self.root.path().join("module")
    }

    pub fn plan_file(&self) -> PathBuf {
        self.module_dir().join("tfplan")
    }

    pub fn backend_file(&self) -> PathBuf {
        self.module_dir().join("config.s3.tfbackend")
    }

    /// Pre-create the backend file so `ensure` takes the idempotent path.
    pub fn write_backend_file(&self) {
        fs::write(self.backend_file(), "bucket = \"preexisting\"\n").unwrap();
    }

    pub fn config(&self) -> DeployConfig {
        DeployConfig {
            tool: ToolConfig {
                binary: self.tool_path().to_string_lossy().into_owned(),
                root_module: self.module_dir(),
                version_manager: None,
                backend: BackendConfig {
                    file: "config.s3.tfbackend".to_string(),
                    key: "myapp/terraform.tfstate".to_string(),
                    encrypt: true,
                    state_bucket_parameter: "/myapp/state-bucket".to_string(),
                    lock_table_parameter: "/myapp/lock-table".to_string(),
                },
            },
        }
    }

    pub fn runner(&self) -> ToolRunner {
        ToolRunner::new(self.tool_path().to_string_lossy().into_owned(), self.module_dir())
    }

    pub fn invocations(&self) -> Vec<String> {
        match fs::read_to_string(self.root.path().join("invocations.log")) {
            Ok(log) => log.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}
