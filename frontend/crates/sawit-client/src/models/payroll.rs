use crate::models::wire_enum;

use serde::{Deserialize, Serialize};

wire_enum! {
    EmployeeStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Terminated => "TERMINATED",
    }
}

wire_enum! {
    PayrollStatus {
        Pending => "PENDING",
        Approved => "APPROVED",
        Paid => "PAID",
        Cancelled => "CANCELLED",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub employee_code: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plantation_id: Option<i64>,
    pub base_salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub name: String,
    pub employee_code: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plantation_id: Option<i64>,
    pub base_salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    pub status: EmployeeStatus,
}

/// One pay period for one employee. Amounts are rupiah.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    pub period_start: String,
    pub period_end: String,
    pub base_amount: f64,
    #[serde(default)]
    pub bonus_amount: f64,
    #[serde(default)]
    pub deduction_amount: f64,
    /// Computed by the service as base + bonus - deduction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    pub status: PayrollStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Payroll {
    /// The service total when present, otherwise base + bonus - deduction.
    pub fn total(&self) -> f64 {
        self.total_amount
            .unwrap_or(self.base_amount + self.bonus_amount - self.deduction_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRequest {
    pub employee_id: i64,
    pub period_start: String,
    pub period_end: String,
    pub base_amount: f64,
    pub bonus_amount: f64,
    pub deduction_amount: f64,
    pub status: PayrollStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
