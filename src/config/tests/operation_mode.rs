//! Tests for operation mode determination.

use rstest::rstest;

use crate::RevueConfig;
use crate::config::OperationMode;

#[rstest]
#[case::default_is_summary(false, false, false, OperationMode::Summary)]
#[case::export_flag(true, false, false, OperationMode::Export)]
#[case::cloud_flag(false, true, false, OperationMode::WordCloud)]
#[case::tui_flag(false, false, true, OperationMode::Browse)]
#[case::tui_wins_over_export(true, false, true, OperationMode::Browse)]
#[case::tui_wins_over_cloud(false, true, true, OperationMode::Browse)]
#[case::export_wins_over_cloud(true, true, false, OperationMode::Export)]
fn operation_mode_follows_flags(
    #[case] export: bool,
    #[case] cloud: bool,
    #[case] tui: bool,
    #[case] expected: OperationMode,
) {
    let config = RevueConfig {
        export,
        cloud,
        tui,
        ..RevueConfig::default()
    };

    assert_eq!(config.operation_mode(), expected);
}
