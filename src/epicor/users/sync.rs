use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::field::Empty;
use tracing::{Span, info, instrument};

use crate::epicor::users::client::{ErpClient, Method};
use crate::epicor::users::config::Config;
use crate::epicor::users::error::Result;
use crate::epicor::users::identity::derive_user_id;
use crate::epicor::users::io::csv_read::EmployeeRecords;
use crate::epicor::users::model::{DisabledUserFile, Employee, NewUserFile};

/// Collection endpoint of the `UserFile` business object.
pub const USER_FILES_ENDPOINT: &str = "Ice.BO.UserFileSvc/UserFiles";

pub const DEFAULT_NEW_EMPLOYEES: &str = "./data/new-employees.csv";
pub const DEFAULT_INACTIVE_EMPLOYEES: &str = "./data/inactive-employees.csv";

/// Endpoint addressing a single `UserFile` row.
pub fn user_file_endpoint(user_id: &str) -> String {
    format!("{USER_FILES_ENDPOINT}({user_id})")
}

/// Locations of the two employee files driving a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFiles {
    pub new_employees: PathBuf,
    pub inactive_employees: PathBuf,
}

impl Default for EmployeeFiles {
    fn default() -> Self {
        Self {
            new_employees: PathBuf::from(DEFAULT_NEW_EMPLOYEES),
            inactive_employees: PathBuf::from(DEFAULT_INACTIVE_EMPLOYEES),
        }
    }
}

/// Number of accounts touched by a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub created: usize,
    pub inactivated: usize,
}

/// Creates the ERP account of a new employee.
#[instrument(level = "debug", skip_all, fields(user_id = Empty))]
pub fn create_user_account(
    client: &ErpClient,
    config: &Config,
    employee: &Employee,
) -> Result<Value> {
    let user_id = derive_user_id(employee)?;
    Span::current().record("user_id", user_id.as_str());
    let user_file = NewUserFile {
        email_address: format!("{user_id}@{}", config.company_domain),
        name: employee.display_name(),
        user_id,
    };

    let response = client.send(USER_FILES_ENDPOINT, &user_file, Method::Post.as_str())?;
    info!(user_id = %user_file.user_id, "created user account");
    Ok(response)
}

/// Disables the ERP account of a departing employee.
#[instrument(level = "debug", skip_all, fields(user_id = Empty))]
pub fn inactivate_user_account(client: &ErpClient, employee: &Employee) -> Result<Value> {
    let user_id = derive_user_id(employee)?;
    Span::current().record("user_id", user_id.as_str());
    let endpoint = user_file_endpoint(&user_id);
    let user_file = DisabledUserFile::new(user_id);

    let response = client.send(&endpoint, &user_file, Method::Patch.as_str())?;
    info!(user_id = %user_file.user_id, "disabled user account");
    Ok(response)
}

/// Creates an account for every employee listed in `path`, in file order.
/// Stops at the first failure.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn create_accounts(client: &ErpClient, config: &Config, path: &Path) -> Result<usize> {
    let mut created = 0;
    for employee in EmployeeRecords::open(path)? {
        create_user_account(client, config, &employee?)?;
        created += 1;
    }
    info!(created, "new employees processed");
    Ok(created)
}

/// Disables the account of every employee listed in `path`, in file order.
/// Stops at the first failure.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn inactivate_accounts(client: &ErpClient, path: &Path) -> Result<usize> {
    let mut inactivated = 0;
    for employee in EmployeeRecords::open(path)? {
        inactivate_user_account(client, &employee?)?;
        inactivated += 1;
    }
    info!(inactivated, "inactive employees processed");
    Ok(inactivated)
}

/// Runs both phases: every new employee is created before the inactive
/// employee file is opened. The first error aborts the run and nothing
/// already sent is rolled back.
#[instrument(level = "info", skip_all, fields(api_url = %config.api_url))]
pub fn run(config: &Config, files: &EmployeeFiles) -> Result<SyncReport> {
    let client = ErpClient::new(config)?;
    let created = create_accounts(&client, config, &files.new_employees)?;
    let inactivated = inactivate_accounts(&client, &files.inactive_employees)?;
    Ok(SyncReport {
        created,
        inactivated,
    })
}
