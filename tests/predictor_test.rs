mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

use common::{complete_answers, BrokenModel, CountingScaler, FixedModel};
use degree_predictor::{
    DegreeClass, PipelineError, PredictError, Predictor, StandardScaler, NOT_ANSWERED, UNKNOWN_LABEL,
};

fn predictor_with(scaler: CountingScaler, model: FixedModel) -> Predictor {
    Predictor::builder()
        .with_scaler(scaler)
        .unwrap()
        .with_model(model)
        .unwrap()
        .build()
        .expect("Failed to create predictor")
}

#[test]
fn test_end_to_end_prediction() -> Result<(), Box<dyn std::error::Error>> {
    let model = FixedModel::returning(3);
    let predictor = predictor_with(CountingScaler::default(), model.clone());

    let prediction = predictor.predict(&complete_answers())?;
    assert_eq!(prediction.code, 3);
    assert_eq!(prediction.class, Some(DegreeClass::SecondClassUpper));
    assert_eq!(prediction.label, "Second Class Upper");
    assert_eq!(
        prediction.to_string(),
        "Predicted degree classification: Second Class Upper"
    );

    let input = model.last_input.lock().unwrap().clone().unwrap();
    assert_eq!(input.shape(), &[1, 53]);
    assert_eq!(input[[0, 0]], 2.0);
    Ok(())
}

#[test]
fn test_unknown_code_degrades_to_sentinel() -> Result<(), Box<dyn std::error::Error>> {
    let predictor = predictor_with(CountingScaler::default(), FixedModel::returning(99));
    let prediction = predictor.predict(&complete_answers())?;
    assert_eq!(prediction.label, UNKNOWN_LABEL);
    assert_eq!(prediction.class, None);
    assert_eq!(prediction.to_string(), "Predicted degree classification: Unknown");
    Ok(())
}

#[test]
fn test_placeholder_stops_the_pipeline() {
    let scaler = CountingScaler::default();
    let model = FixedModel::returning(1);
    let predictor = predictor_with(scaler.clone(), model.clone());

    let answers = complete_answers().with("Gender", NOT_ANSWERED);
    match predictor.predict(&answers) {
        Err(PredictError::IncompleteInput(e)) => assert_eq!(e.missing, vec!["Gender"]),
        other => panic!("expected incomplete input, got {:?}", other),
    }
    assert_eq!(scaler.calls.load(Ordering::SeqCst), 0);
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_empty_transport_selection_is_incomplete() {
    let scaler = CountingScaler::default();
    let predictor = predictor_with(scaler.clone(), FixedModel::returning(1));

    let answers = complete_answers().with("TransportMode", Vec::<&str>::new());
    let err = predictor.predict(&answers).unwrap_err();
    assert!(matches!(err, PredictError::IncompleteInput(ref e) if e.missing == vec!["TransportMode"]));
    assert!(err.to_string().starts_with("Please fill all fields before prediction."));
    assert_eq!(scaler.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_placeholder_only_selection_is_incomplete() {
    let scaler = CountingScaler::default();
    let predictor = predictor_with(scaler.clone(), FixedModel::returning(1));

    for selection in [vec![NOT_ANSWERED], vec![""]] {
        let answers = complete_answers().with("TransportMode", selection);
        assert!(matches!(
            predictor.predict(&answers),
            Err(PredictError::IncompleteInput(ref e)) if e.missing == vec!["TransportMode"]
        ));
    }
    assert_eq!(scaler.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_scaler_failure_is_a_pipeline_error() {
    let scaler = CountingScaler { fail: true, ..Default::default() };
    let model = FixedModel::returning(1);
    let predictor = predictor_with(scaler, model.clone());

    let err = predictor.predict(&complete_answers()).unwrap_err();
    assert!(matches!(err, PredictError::Pipeline(PipelineError::Scaler(_))));
    assert_eq!(err.to_string(), "Error during prediction: Scaler error: scaler exploded");
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_model_failure_is_a_pipeline_error() -> Result<(), Box<dyn std::error::Error>> {
    let predictor = Predictor::builder()
        .with_scaler(CountingScaler::default())?
        .with_model(BrokenModel)?
        .build()?;

    let err = predictor.predict(&complete_answers()).unwrap_err();
    assert!(matches!(err, PredictError::Pipeline(PipelineError::Model(_))));
    assert!(err.to_string().contains("Got invalid dimensions for input"));
    Ok(())
}

#[test]
fn test_unknown_ordinal_value_is_a_pipeline_error() {
    let predictor = predictor_with(CountingScaler::default(), FixedModel::returning(1));
    let answers = complete_answers().with("TravelTime", "About a day");
    let err = predictor.predict(&answers).unwrap_err();
    assert!(matches!(err, PredictError::Pipeline(PipelineError::Encoding(_))));
    assert!(err.to_string().starts_with("Error during prediction:"));
}

#[test]
fn test_standard_scaler_in_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    let model = FixedModel::returning(4);
    let predictor = Predictor::builder()
        .with_scaler(StandardScaler::new(vec![1.0; 53], vec![2.0; 53])?)?
        .with_model(model.clone())?
        .build()?;

    let prediction = predictor.predict(&complete_answers())?;
    assert_eq!(prediction.class, Some(DegreeClass::FirstClass));

    let input = model.last_input.lock().unwrap().clone().unwrap();
    // AgeAtEnrollment encodes to 2, so (2 - 1) / 2
    assert_eq!(input[[0, 0]], 0.5);
    Ok(())
}

#[test]
fn test_info() {
    let predictor = predictor_with(CountingScaler::default(), FixedModel::returning(1));
    let info = predictor.info();
    assert_eq!(info.num_fields, 25);
    assert_eq!(info.feature_width, 53);
    assert_eq!(info.model_path, None);
    assert_eq!(
        info.class_labels,
        vec!["Pass Class", "Second Class Lower", "Second Class Upper", "First Class"]
    );
}

#[test]
fn test_thread_safety() {
    let model = FixedModel::returning(2);
    let predictor = Arc::new(predictor_with(CountingScaler::default(), model.clone()));
    let mut handles = vec![];

    for _ in 0..4 {
        let predictor = Arc::clone(&predictor);
        handles.push(thread::spawn(move || {
            let prediction = predictor.predict(&complete_answers()).unwrap();
            assert_eq!(prediction.label, "Second Class Lower");
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(model.calls.load(Ordering::SeqCst), 4);
}
