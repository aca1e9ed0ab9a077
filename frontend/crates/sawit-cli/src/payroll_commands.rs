use crate::CliResult;
use crate::app::to_json;
use crate::defaults::InputDefaults;

use sawit_client::models::{EmployeeRequest, EmployeeStatus, PayrollRequest, PayrollStatus};
use sawit_client::services::SawitApi;

use clap::{Args, Subcommand};
use serde_json::Value;

const DEFAULT_PAYMENT_METHOD: &str = "BANK_TRANSFER";

#[derive(Subcommand, Debug)]
pub enum PayrollCommands {
    /// List employees
    Employees,

    /// Add an employee
    AddEmployee(EmployeeArgs),

    /// List payroll records
    Records,

    /// Add a payroll record for one pay period
    AddRecord(PayrollArgs),

    /// Check the payroll service
    Health,
}

#[derive(Args, Debug, Clone)]
pub struct EmployeeArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub employee_code: String,

    #[arg(long)]
    pub position: String,

    #[arg(long)]
    pub plantation_id: Option<i64>,

    /// Monthly base salary in rupiah
    #[arg(long)]
    pub base_salary: f64,

    #[arg(long)]
    pub phone_number: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// YYYY-MM-DDTHH:MM (default: now)
    #[arg(long)]
    pub hire_date: Option<String>,

    /// active, inactive or terminated
    #[arg(long, default_value = "ACTIVE")]
    pub status: EmployeeStatus,
}

impl EmployeeArgs {
    pub(crate) fn into_request(self, defaults: &InputDefaults) -> EmployeeRequest {
        EmployeeRequest {
            name: self.name,
            employee_code: self.employee_code,
            position: self.position,
            plantation_id: self.plantation_id,
            base_salary: self.base_salary,
            phone_number: self.phone_number,
            address: self.address,
            hire_date: Some(self.hire_date.unwrap_or_else(|| defaults.now_input())),
            status: self.status,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PayrollArgs {
    #[arg(long)]
    pub employee_id: i64,

    /// YYYY-MM-DDTHH:MM (default: now)
    #[arg(long)]
    pub period_start: Option<String>,

    /// YYYY-MM-DDTHH:MM (default: six days after the start)
    #[arg(long)]
    pub period_end: Option<String>,

    #[arg(long)]
    pub base_amount: f64,

    #[arg(long, default_value_t = 0.0)]
    pub bonus_amount: f64,

    #[arg(long, default_value_t = 0.0)]
    pub deduction_amount: f64,

    /// pending, approved, paid or cancelled
    #[arg(long, default_value = "PENDING")]
    pub status: PayrollStatus,

    #[arg(long, default_value = DEFAULT_PAYMENT_METHOD)]
    pub payment_method: String,

    #[arg(long)]
    pub notes: Option<String>,
}

impl PayrollArgs {
    pub(crate) fn into_request(self, defaults: &InputDefaults) -> PayrollRequest {
        let (period_start, period_end) =
            defaults.payroll_period(self.period_start, self.period_end);

        PayrollRequest {
            employee_id: self.employee_id,
            period_start,
            period_end,
            base_amount: self.base_amount,
            bonus_amount: self.bonus_amount,
            deduction_amount: self.deduction_amount,
            status: self.status,
            payment_method: Some(self.payment_method).filter(|method| !method.is_empty()),
            notes: self.notes,
        }
    }
}

impl PayrollCommands {
    pub(crate) async fn execute(
        self,
        api: &SawitApi,
        defaults: &InputDefaults,
    ) -> CliResult<Value> {
        let payroll = api.payroll();

        match self {
            PayrollCommands::Employees => to_json(&payroll.get_employees().await?),
            PayrollCommands::AddEmployee(args) => {
                to_json(&payroll.create_employee(&args.into_request(defaults)).await?)
            }
            PayrollCommands::Records => to_json(&payroll.get_payrolls().await?),
            PayrollCommands::AddRecord(args) => {
                to_json(&payroll.create_payroll(&args.into_request(defaults)).await?)
            }
            PayrollCommands::Health => to_json(&payroll.check_health().await?),
        }
    }
}
