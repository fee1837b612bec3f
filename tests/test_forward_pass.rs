// Tests for network construction and inference: output shape, determinism,
// dimension checks and read-only sharing across threads.

use approx::assert_abs_diff_eq;
use ffnet::prelude::*;

fn topologies() -> Vec<(usize, Vec<LayerSpec>)> {
    vec![
        (1, vec![layer(1, Activation::Sigmoid)]),
        (2, vec![layer(5, Activation::Relu), layer(1, Activation::Sigmoid)]),
        (
            3,
            vec![
                layer(7, Activation::Tanh),
                layer(4, Activation::Relu),
                layer(2, Activation::Linear),
            ],
        ),
        (10, vec![layer(10, Activation::Sigmoid)]),
    ]
}

// ============================================================================
// Output shape and determinism
// ============================================================================

#[test]
fn test_predict_output_length_matches_last_layer() {
    for (seed, (input_size, specs)) in topologies().into_iter().enumerate() {
        let net = Network::seeded(input_size, &specs, seed as u64).unwrap();
        let input: Vec<f64> = (0..input_size).map(|i| i as f64 * 0.3 - 0.5).collect();
        let output = net.predict(&input).unwrap();
        assert_eq!(output.len(), specs.last().unwrap().size);
        assert_eq!(output.len(), net.output_size());
        assert!(output.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_predict_is_deterministic() {
    let net = Network::seeded(2, &[layer(5, Activation::Relu), layer(1, Activation::Sigmoid)], 9).unwrap();
    let before = net.clone();
    let first = net.predict(&[0.25, -1.5]).unwrap();
    let second = net.predict(&[0.25, -1.5]).unwrap();
    assert_eq!(first, second);
    assert_eq!(net, before);
}

#[test]
fn test_sigmoid_output_range() {
    let net = Network::seeded(2, &[layer(3, Activation::Linear), layer(2, Activation::Sigmoid)], 4).unwrap();
    for input in [[1e6, -1e6], [0.0, 0.0], [-1e9, -1e9]] {
        let y = net.predict(&input).unwrap();
        assert!(y.iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn test_single_linear_layer_computation() {
    let dense = Dense::from_parameters(array![[2.0], [3.0]], array![1.0], Activation::Linear).unwrap();
    let net = Network::from_layers(vec![dense]).unwrap();
    let y = net.predict(&[1.0, -1.0]).unwrap();
    assert_abs_diff_eq!(y[0], 2.0 - 3.0 + 1.0, epsilon = 1e-12);
}

// ============================================================================
// Dimension mismatch
// ============================================================================

#[test]
fn test_predict_wrong_length_is_an_error() {
    let net = Network::seeded(3, &[layer(2, Activation::Relu)], 1).unwrap();
    for bad in [vec![], vec![1.0], vec![1.0, 2.0], vec![1.0, 2.0, 3.0, 4.0]] {
        let err = net.predict(&bad).unwrap_err();
        assert!(err.is_dimension_mismatch(), "unexpected error {err}");
        match err {
            NNError::DimensionMismatch { expected, got, .. } => {
                assert_eq!(expected, 3);
                assert_eq!(got, bad.len());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

#[test]
fn test_predict_many_reports_mismatch() {
    let net = Network::seeded(2, &[layer(1, Activation::Sigmoid)], 1).unwrap();
    let inputs = vec![vec![0.0, 1.0], vec![1.0]];
    assert!(net.predict_many(&inputs).unwrap_err().is_dimension_mismatch());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_invalid_topologies() {
    assert!(Network::seeded(0, &[layer(1, Activation::Relu)], 0).unwrap_err().is_configuration());
    assert!(Network::seeded(1, &[], 0).unwrap_err().is_configuration());
    assert!(Network::seeded(1, &[layer(0, Activation::Relu)], 0).unwrap_err().is_configuration());
}

#[test]
fn test_injected_rng_reproduces_weights() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let specs = [layer(4, Activation::Relu), layer(2, Activation::Sigmoid)];
    let a = Network::new(3, &specs, &mut StdRng::seed_from_u64(77)).unwrap();
    let b = Network::seeded(3, &specs, 77).unwrap();
    assert_eq!(a, b);
    for layer in a.layers() {
        assert!(layer.weights().iter().all(|w| (-1.0..1.0).contains(w)));
        assert!(layer.biases().iter().all(|w| (-1.0..1.0).contains(w)));
    }
}

// ============================================================================
// Concurrent inference
// ============================================================================

#[test]
fn test_concurrent_predict_matches_sequential() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Network>();

    let net = Network::seeded(2, &[layer(8, Activation::Tanh), layer(3, Activation::Sigmoid)], 12).unwrap();
    let inputs: Vec<Vec<f64>> = (0..64).map(|i| vec![i as f64 / 64.0, 1.0 - i as f64 / 32.0]).collect();
    let sequential: Vec<_> = inputs.iter().map(|x| net.predict(x).unwrap()).collect();

    assert_eq!(net.predict_many(&inputs).unwrap(), sequential);

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .chunks(16)
            .map(|chunk| {
                let net = &net;
                scope.spawn(move || chunk.iter().map(|x| net.predict(x).unwrap()).collect::<Vec<_>>())
            })
            .collect();
        let threaded: Vec<_> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        assert_eq!(threaded, sequential);
    });
}
