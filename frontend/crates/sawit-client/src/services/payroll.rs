use crate::models::{Employee, EmployeeRequest, HealthStatus, Payroll, PayrollRequest};
use crate::{Client, ClientResult};

use sawit_config::PayrollEndpoints;

/// Employees and payroll records
pub struct PayrollService<'a> {
    client: &'a Client,
    endpoints: &'a PayrollEndpoints,
}

impl<'a> PayrollService<'a> {
    pub fn new(client: &'a Client, endpoints: &'a PayrollEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub async fn get_employees(&self) -> ClientResult<Vec<Employee>> {
        self.client.get(&self.endpoints.employees).await
    }

    pub async fn create_employee(&self, data: &EmployeeRequest) -> ClientResult<Employee> {
        self.client.post(&self.endpoints.employees, data).await
    }

    pub async fn get_payrolls(&self) -> ClientResult<Vec<Payroll>> {
        self.client.get(&self.endpoints.payrolls).await
    }

    pub async fn create_payroll(&self, data: &PayrollRequest) -> ClientResult<Payroll> {
        self.client.post(&self.endpoints.payrolls, data).await
    }

    pub async fn check_health(&self) -> ClientResult<HealthStatus> {
        self.client.get(&self.endpoints.health).await
    }
}
