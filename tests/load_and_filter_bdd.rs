//! Behavioural tests for loading review files and partitioning by sentiment.

#[path = "load_and_filter_bdd/mod.rs"]
mod load_and_filter_bdd_support;

use load_and_filter_bdd_support::{LoadState, add_input_file};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use revue::corpus::{ColumnSchema, LoadError, Sentiment, load_collection};

#[fixture]
fn load_state() -> LoadState {
    LoadState::default()
}

#[given("a reviews file with three labelled rows")]
fn first_file(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    add_input_file(
        load_state,
        "first.csv",
        "text,polarity\n\
         this blender is superb,positive\n\
         the blendr arrived broken,negative\n\
         lovely toaster,positive\n",
    )
}

#[given("a second reviews file with two labelled rows")]
fn second_file(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    add_input_file(
        load_state,
        "second.csv",
        "text,polarity\n\
         cheap plastic kettle,1\n\
         chops everything quickly,2\n",
    )
}

#[given("a reviews file with an unrecognised label on its third line")]
fn file_with_bad_label(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    add_input_file(
        load_state,
        "bad_label.csv",
        "text,polarity\n\
         fine,positive\n\
         awful,mixed\n",
    )
}

#[given("a reviews file without a polarity column")]
fn file_without_label_column(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    add_input_file(
        load_state,
        "no_label.csv",
        "text,stars\n\
         fine,5\n",
    )
}

#[when("the collection is loaded")]
fn load_the_collection(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = load_state.inputs.take().ok_or("no input files prepared")?;

    match load_collection(&inputs, &ColumnSchema::default()) {
        Ok(collection) => {
            drop(load_state.error.take());
            load_state.collection.set(collection);
        }
        Err(error) => {
            drop(load_state.collection.take());
            load_state.error.set(error);
        }
    }
    Ok(())
}

#[when("the collection is loaded from no inputs")]
fn load_from_no_inputs(load_state: &LoadState) {
    match load_collection(&[], &ColumnSchema::default()) {
        Ok(collection) => load_state.collection.set(collection),
        Err(error) => load_state.error.set(error),
    }
}

#[then("the collection holds five reviews in file order")]
fn assert_five_in_order(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    let bodies = load_state
        .collection
        .with_ref(|collection| {
            collection
                .records()
                .iter()
                .map(|record| record.body.clone())
                .collect::<Vec<_>>()
        })
        .ok_or("collection missing")?;

    let expected = vec![
        "this blender is superb".to_owned(),
        "the blendr arrived broken".to_owned(),
        "lovely toaster".to_owned(),
        "cheap plastic kettle".to_owned(),
        "chops everything quickly".to_owned(),
    ];
    if bodies != expected {
        return Err(format!("unexpected load order: {bodies:?}").into());
    }
    Ok(())
}

#[then("the sentiment counts partition the collection")]
fn assert_counts_partition(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    load_state
        .collection
        .with_ref(|collection| {
            let positive = collection.count_with_sentiment(Sentiment::Positive);
            let negative = collection.count_with_sentiment(Sentiment::Negative);
            if positive + negative != collection.len() {
                return Err(format!(
                    "counts {positive}+{negative} do not partition {} records",
                    collection.len()
                ));
            }
            if positive != 2 || negative != 1 {
                return Err(format!("unexpected counts: {positive}/{negative}"));
            }
            Ok(())
        })
        .ok_or("collection missing")??;
    Ok(())
}

#[then("loading fails naming the offending line")]
fn assert_label_error(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    let error = load_state.error.take().ok_or("expected a load error")?;
    match error {
        LoadError::Label { line, ref value, .. } => {
            if line != 3 {
                return Err(format!("expected line 3, got {line}").into());
            }
            if value != "mixed" {
                return Err(format!("expected value 'mixed', got '{value}'").into());
            }
            Ok(())
        }
        other => Err(format!("expected a label error, got {other:?}").into()),
    }
}

#[then("loading fails naming the missing column")]
fn assert_missing_column_error(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    let error = load_state.error.take().ok_or("expected a load error")?;
    match error {
        LoadError::MissingColumn { ref column, .. } => {
            if column != "polarity" {
                return Err(format!("expected column 'polarity', got '{column}'").into());
            }
            Ok(())
        }
        other => Err(format!("expected a missing-column error, got {other:?}").into()),
    }
}

#[then("loading fails because no inputs were given")]
fn assert_no_inputs_error(load_state: &LoadState) -> Result<(), Box<dyn std::error::Error>> {
    let error = load_state.error.take().ok_or("expected a load error")?;
    match error {
        LoadError::NoInputs => Ok(()),
        other => Err(format!("expected a no-inputs error, got {other:?}").into()),
    }
}

#[scenario(path = "tests/features/load_and_filter.feature", index = 0)]
fn files_concatenate_in_order(load_state: LoadState) {
    let _ = load_state;
}

#[scenario(path = "tests/features/load_and_filter.feature", index = 1)]
fn counts_partition_the_collection(load_state: LoadState) {
    let _ = load_state;
}

#[scenario(path = "tests/features/load_and_filter.feature", index = 2)]
fn bad_labels_name_their_line(load_state: LoadState) {
    let _ = load_state;
}

#[scenario(path = "tests/features/load_and_filter.feature", index = 3)]
fn missing_columns_are_reported(load_state: LoadState) {
    let _ = load_state;
}

#[scenario(path = "tests/features/load_and_filter.feature", index = 4)]
fn empty_input_lists_are_rejected(load_state: LoadState) {
    let _ = load_state;
}
