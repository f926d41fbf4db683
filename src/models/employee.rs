//! Employee registry model.
//!
//! The engine consumes employee records from an external registry; only the
//! fields that influence shift inference and wage computation are modeled.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an employee's base wage is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// Base wage is an hourly rate.
    Hourly,
    /// Base wage is a monthly salary, converted to an hourly rate using the
    /// configured standard monthly hours.
    Monthly,
}

/// The employment arrangement of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    /// Regular employment.
    Regular,
    /// Fixed-term contract employment.
    Contract,
    /// Part-time employment.
    PartTime,
}

/// An employee as seen by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Sub-department within the department. Certain sub-departments are
    /// excluded from automatic shift inference (configuration).
    #[serde(default)]
    pub sub_department: String,
    /// Position or title.
    #[serde(default)]
    pub position: String,
    /// How the base wage is expressed.
    pub salary_type: SalaryType,
    /// The employment arrangement.
    pub work_type: WorkType,
    /// Base wage: an hourly rate for [`SalaryType::Hourly`], a monthly
    /// salary for [`SalaryType::Monthly`].
    pub base_wage: Decimal,
}

impl Employee {
    /// Resolves the employee's hourly rate.
    ///
    /// Hourly employees use their base wage directly; monthly employees
    /// divide by the configured standard monthly hours.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{Employee, SalaryType, WorkType};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     department: "operations".to_string(),
    ///     sub_department: String::new(),
    ///     position: String::new(),
    ///     salary_type: SalaryType::Hourly,
    ///     work_type: WorkType::Regular,
    ///     base_wage: Decimal::new(10_000, 0),
    /// };
    /// assert_eq!(employee.hourly_rate(Decimal::new(209, 0)), Decimal::new(10_000, 0));
    /// ```
    pub fn hourly_rate(&self, standard_monthly_hours: Decimal) -> Decimal {
        match self.salary_type {
            SalaryType::Hourly => self.base_wage,
            SalaryType::Monthly => self.base_wage / standard_monthly_hours,
        }
    }
}
