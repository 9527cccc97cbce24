#[cfg(test)]
mod tests {
    use super::super::assembler::StatementAssembler;
    use super::super::client::{MockYahooClient, StatementProvider};
    use super::super::payload::*;
    use statement_core::AnalysisError;
    use std::collections::BTreeMap;

    fn raw(value: i64) -> RawItem {
        RawItem {
            raw: value,
            ..Default::default()
        }
    }

    fn income_record(end_date: &str, revenue: i64, cost: i64, net: i64) -> IncomeStatementRecord {
        IncomeStatementRecord {
            end_date: RawItem {
                fmt: end_date.to_string(),
                ..Default::default()
            },
            total_revenue: raw(revenue),
            cost_of_revenue: raw(cost),
            net_income: raw(net),
            ..Default::default()
        }
    }

    fn income_response(records: Vec<IncomeStatementRecord>) -> IncomeStatementResponse {
        IncomeStatementResponse {
            history: IncomeStatementHistory { records },
        }
    }

    fn balance_item(name: &str, values: &[(i32, i64)]) -> BalanceSheetItem {
        BalanceSheetItem {
            name: name.to_string(),
            values: values.iter().copied().collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn round_trips_supplied_values() {
        let income = income_response(vec![
            income_record("2021-12-31", 3000, 1800, 600),
            income_record("2019-12-31", 1000, 600, 200),
            income_record("2020-12-31", 2000, 1200, 400),
        ]);
        let balance = BalanceSheetResponse {
            items: vec![
                balance_item("Total Current Assets", &[(2019, 500), (2020, 550), (2021, 600)]),
                balance_item("Total Current Liabilities", &[(2019, 250), (2020, 275), (2021, 300)]),
                balance_item("Total Liab", &[(2019, 900), (2020, 950), (2021, 1000)]),
                balance_item("Total Stockholder Equity", &[(2019, 1000), (2020, 1100), (2021, 1200)]),
                balance_item("Long Term Debt", &[(2019, 400), (2020, 420), (2021, 440)]),
            ],
        };

        let assembler = StatementAssembler::new(2018..=2022);
        let series = assembler.assemble(&income, 100, &balance).unwrap();

        assert_eq!(series.years().collect::<Vec<_>>(), vec![2019, 2020, 2021]);

        let y2020 = series.get(2020).unwrap();
        assert_eq!(y2020.total_revenue, 2000);
        assert_eq!(y2020.cost_of_revenue, 1200);
        assert_eq!(y2020.net_earnings, 400);
        assert_eq!(y2020.shares_outstanding, 100);
        assert_eq!(y2020.total_current_assets, 550);
        assert_eq!(y2020.total_liabilities, 950);
        assert_eq!(y2020.long_term_debt, 420);
    }

    #[test]
    fn malformed_end_date_is_surfaced() {
        let income = income_response(vec![income_record("not-a-date", 1000, 600, 200)]);
        let assembler = StatementAssembler::new(2018..=2022);

        let err = assembler
            .assemble(&income, 100, &BalanceSheetResponse::default())
            .unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedDate(d) if d == "not-a-date"));
    }

    #[test]
    fn unsupported_fiscal_year_is_an_error_not_a_crash() {
        let income = income_response(vec![
            income_record("2020-12-31", 1000, 600, 200),
            income_record("2099-12-31", 9000, 5000, 2000),
        ]);
        let assembler = StatementAssembler::new(2018..=2022);

        let err = assembler
            .assemble(&income, 100, &BalanceSheetResponse::default())
            .unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFiscalYear(2099)));
    }

    #[test]
    fn unrecognized_balance_items_are_ignored() {
        let income = income_response(vec![income_record("2020-12-31", 1000, 600, 200)]);
        let balance = BalanceSheetResponse {
            items: vec![
                balance_item("Good Will", &[(2020, 123)]),
                balance_item("total current assets", &[(2020, 500)]),
            ],
        };

        let assembler = StatementAssembler::new([2020]);
        let series = assembler.assemble(&income, 100, &balance).unwrap();

        // Matching is case-insensitive with whitespace stripped; the
        // unknown item changes nothing.
        assert_eq!(series.get(2020).unwrap().total_current_assets, 500);
        assert_eq!(series.get(2020).unwrap().total_assets, 0);
    }

    #[test]
    fn balance_years_without_income_records_are_dropped() {
        let income = income_response(vec![income_record("2020-12-31", 1000, 600, 200)]);
        let balance = BalanceSheetResponse {
            items: vec![balance_item("Total Assets", &[(2019, 700), (2020, 800)])],
        };

        let assembler = StatementAssembler::new(2018..=2022);
        let series = assembler.assemble(&income, 100, &balance).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.get(2020).unwrap().total_assets, 800);
    }

    #[test]
    fn absent_income_fields_default_to_zero() {
        let record = IncomeStatementRecord {
            end_date: RawItem {
                fmt: "2021-12-31".to_string(),
                ..Default::default()
            },
            total_revenue: raw(1000),
            ..Default::default()
        };
        let income = income_response(vec![record]);

        let assembler = StatementAssembler::new([2021]);
        let series = assembler
            .assemble(&income, 0, &BalanceSheetResponse::default())
            .unwrap();

        let y = series.get(2021).unwrap();
        assert_eq!(y.total_revenue, 1000);
        assert_eq!(y.interest_expense, 0);
        assert_eq!(y.research_development, 0);
        assert_eq!(y.shares_outstanding, 0);
    }

    #[tokio::test]
    async fn mock_client_payloads_assemble() {
        let provider = MockYahooClient::new();
        let income = provider.income_statement("AAPL").await.unwrap();
        let info = provider.stock_info("AAPL").await.unwrap();
        let balance = provider.balance_sheet("AAPL").await.unwrap();

        let assembler = StatementAssembler::new(2018..=2022);
        let series = assembler
            .assemble(&income, info.data.shares_outstanding, &balance)
            .unwrap();

        assert_eq!(series.len(), 4);
        let y2021 = series.get(2021).unwrap();
        assert_eq!(y2021.total_revenue, 365_817_000);
        assert_eq!(y2021.total_shareholders_equity, 63_090_000);
        assert_eq!(y2021.shares_outstanding, 16_426_786_000);
    }
}
