use super::{ChangeEntry, List, deserialize_decimal_opt, null_as_empty};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for generating an affordability, expense or income snapshot.
/// Months are `YYYY-MM`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_month: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SnapshotLinks {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub accounts: Vec<String>,
    pub expenses: Option<String>,
    pub income: Option<String>,
    #[serde(rename = "self")]
    pub self_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccountProduct {
    pub product: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affordability {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub coverage_days: Option<u32>,
    pub from_month: Option<String>,
    pub to_month: Option<String>,
    pub generated_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assets: Vec<Asset>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub external: Vec<ExternalLiability>,
    pub liabilities: Option<Liabilities>,
    pub summary: Option<AffordabilitySummaryTotals>,
    #[serde(default)]
    pub links: SnapshotLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub account: Option<AccountProduct>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub available_funds: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub balance: Option<Decimal>,
    pub currency: Option<String>,
    pub institution: Option<String>,
    pub previous6_months: Option<BalanceRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRange {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub max_balance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub min_balance: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLiability {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub change_history: Vec<ChangeEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub payments: Vec<PaymentPattern>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPattern {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount_avg: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount_avg_monthly: Option<Decimal>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub no_occurrences: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub total: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Liabilities {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub credit: Vec<CreditLiability>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub loan: Vec<LoanLiability>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditLiability {
    pub account: Option<AccountProduct>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub available_funds: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub balance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub credit_limit: Option<Decimal>,
    pub currency: Option<String>,
    pub institution: Option<String>,
    pub previous6_months: Option<CashAdvances>,
    pub previous_month: Option<MonthTotals>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashAdvances {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub cash_advances: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub arrears: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthTotals {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub max_balance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub min_balance: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub total_credits: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub total_debits: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub total_interest_charged: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub total_repayments: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanLiability {
    pub account: Option<AccountProduct>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub available_funds: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub balance: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub change_history: Vec<ChangeEntry>,
    pub currency: Option<String>,
    pub institution: Option<String>,
    pub previous6_months: Option<CashAdvances>,
    pub previous_month: Option<MonthTotals>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilitySummaryTotals {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub assets: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub credit_limit: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub expenses: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub liabilities: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub loan_repayment_monthly: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub net_position: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub potential_liabilities_monthly: Option<Decimal>,
    pub regular_income: Option<RegularIncome>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub savings: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularIncome {
    pub previous3_months: Option<MonthlyAverage>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAverage {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub avg_monthly: Option<Decimal>,
}

pub type AffordabilitySummaryList = List<AffordabilitySummary>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilitySummary {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub coverage_days: Option<u32>,
    pub from_month: Option<String>,
    pub to_month: Option<String>,
    pub generated_date: Option<String>,
    pub institutions: Option<serde_json::Value>,
    #[serde(default)]
    pub links: SnapshotLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityTransaction {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub account: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub balance: Option<Decimal>,
    pub class: Option<String>,
    pub description: Option<String>,
    pub direction: Option<String>,
    pub institution: Option<String>,
    pub post_date: Option<String>,
    pub status: Option<String>,
    pub transaction_date: Option<String>,
    #[serde(default)]
    pub links: super::TransactionLinks,
}

/// Spending in one expense category with its history.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCategory {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub avg_monthly: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub change_history: Vec<ChangeEntry>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub summary: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub coverage_days: Option<u32>,
    pub from_month: Option<String>,
    pub to_month: Option<String>,
    pub bank_fees: Option<ExpenseCategory>,
    pub cash_withdrawals: Option<ExpenseCategory>,
    pub external_transfers: Option<ExpenseCategory>,
    pub loan_interests: Option<ExpenseCategory>,
    pub loan_repayments: Option<ExpenseCategory>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub payments: Vec<ExpensePayments>,
    #[serde(default)]
    pub links: SnapshotLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePayments {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub avg_monthly: Option<Decimal>,
    pub division: Option<String>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub percentage_total: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sub_category: Vec<ExpenseSubCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSubCategory {
    pub category: Option<ExpenseClassification>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub change_history: Vec<ChangeEntry>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub summary: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseClassification {
    pub expense_class: Option<ExpenseClass>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseClass {
    pub class_code: Option<String>,
    pub class_title: Option<String>,
    pub division_code: Option<String>,
    pub division_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSummary {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub id: Option<String>,
    pub coverage_days: Option<u32>,
    pub from_month: Option<String>,
    pub to_month: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub regular: Vec<RegularIncomeSource>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub irregular: Vec<IrregularIncomeSource>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub other_credit: Vec<IrregularIncomeSource>,
    pub summary: Option<IncomeTotals>,
    #[serde(default)]
    pub links: SnapshotLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularIncomeSource {
    pub source: Option<String>,
    pub age_days: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub change_history: Vec<ChangeEntry>,
    pub current: Option<IncomeOccurrence>,
    pub frequency: Option<String>,
    pub irregularity: Option<Irregularity>,
    pub previous3_months: Option<IncomeVariance>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrregularIncomeSource {
    pub age_days: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount_avg: Option<Decimal>,
    /// The API spells this field `avgMonthlyOccurence`.
    #[serde(rename = "avgMonthlyOccurence")]
    pub avg_monthly_occurrence: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub change_history: Vec<ChangeEntry>,
    pub current: Option<IncomeOccurrence>,
    pub frequency: Option<String>,
    pub no_occurrences: Option<u32>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeOccurrence {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount: Option<Decimal>,
    pub date: Option<String>,
    pub next_date: Option<String>,
    pub other_credit_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Irregularity {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gaps: Vec<String>,
    pub stability: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeVariance {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount_avg: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub amount_avg_monthly: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub variance: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTotals {
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub irregular_income_avg: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_decimal_opt")]
    pub regular_income_avg: Option<Decimal>,
    #[serde(rename = "regularIncomeYTD", default, deserialize_with = "deserialize_decimal_opt")]
    pub regular_income_ytd: Option<Decimal>,
    pub regular_income_year: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn snapshot_params_omit_empty_fields() {
        let params = SnapshotParams {
            from_month: Some("2023-01".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "fromMonth": "2023-01" })
        );
    }

    #[test]
    fn parses_affordability_mixed_number_encodings() {
        let report: Affordability = serde_json::from_value(json!({
            "type": "affordability",
            "id": "s-1",
            "coverageDays": 180,
            "liabilities": {
                "credit": [{
                    "creditLimit": "5000.00",
                    "previousMonth": { "maxBalance": -120.5, "totalCredits": "300.00" }
                }],
                "loan": []
            },
            "summary": {
                "netPosition": 1520.75,
                "potentialLiabilitiesMonthly": 0,
                "regularIncome": { "previous3Months": { "avgMonthly": "4200.00" } }
            },
            "links": { "accounts": ["/a1", "/a2"], "self": "/users/u/affordability/s-1" }
        }))
        .unwrap();
        let credit = &report.liabilities.as_ref().unwrap().credit[0];
        assert_eq!(credit.credit_limit, Some(Decimal::from(5000)));
        let month = credit.previous_month.as_ref().unwrap();
        assert_eq!(month.max_balance, Some(Decimal::from_str("-120.5").unwrap()));
        let summary = report.summary.unwrap();
        assert_eq!(
            summary.net_position,
            Some(Decimal::from_str("1520.75").unwrap())
        );
        assert_eq!(report.links.accounts.len(), 2);
    }

    #[test]
    fn parses_income_summary() {
        let income: IncomeSummary = serde_json::from_value(json!({
            "type": "income",
            "regular": [{
                "source": "ACME PAYROLL",
                "frequency": "fortnightly",
                "current": { "amount": "2100.00", "date": "2023-03-01", "nextDate": "2023-03-15" },
                "irregularity": { "gaps": [], "stability": "stable" }
            }],
            "irregular": [{ "avgMonthlyOccurence": "0.5", "noOccurrences": 2 }],
            "summary": { "regularIncomeYTD": "12600.00", "regularIncomeYear": null }
        }))
        .unwrap();
        assert_eq!(income.regular[0].source.as_deref(), Some("ACME PAYROLL"));
        assert_eq!(income.irregular[0].no_occurrences, Some(2));
        assert_eq!(
            income.summary.unwrap().regular_income_ytd,
            Some(Decimal::from(12600))
        );
    }
}
