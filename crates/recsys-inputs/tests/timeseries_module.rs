use std::collections::HashMap;

use burn::backend::NdArray;
use burn::module::{Module, Param};
use burn::tensor::backend::Backend;
use burn::tensor::{Tensor, TensorData};
use recsys_inputs::{Inputs, InputsConfig, InputsError, InputsMeta, TimeseriesInputs};

type TestBackend = NdArray<f32>;

#[derive(Module, Debug)]
struct WeightedSteps<B: Backend> {
    weights: Param<Tensor<B, 1>>,
    meta: InputsMeta,
}

impl<B: Backend> WeightedSteps<B> {
    fn new(weights: Tensor<B, 1>, meta: InputsMeta) -> Self {
        Self {
            weights: Param::from_tensor(weights),
            meta,
        }
    }
}

impl<B: Backend> Inputs<B> for WeightedSteps<B> {
    fn meta(&self) -> &InputsMeta {
        &self.meta
    }
}

impl<B: Backend> TimeseriesInputs<B, 3, 2> for WeightedSteps<B> {
    fn forward(&self, inputs: Tensor<B, 3>) -> Tensor<B, 2> {
        let [batch_size, seq_length, num_features] = inputs.dims();
        let weights = self.weights.val().reshape([1, seq_length, 1]);

        (inputs * weights)
            .sum_dim(1)
            .reshape([batch_size, num_features])
    }
}

fn weighted_steps(device: &<TestBackend as Backend>::Device) -> WeightedSteps<TestBackend> {
    let meta = InputsConfig::new(2)
        .with_schema(Some(vec!["history".into()]))
        .init()
        .unwrap();

    WeightedSteps::new(Tensor::from_floats([0.5, 1.0, 2.0], device), meta)
}

fn encode<B: Backend, M: TimeseriesInputs<B, 3, 2>>(
    module: &M,
    inputs: Tensor<B, 3>,
) -> Tensor<B, 2> {
    module.forward(inputs)
}

#[test]
fn forward_through_the_contract() {
    let device = Default::default();
    let module = weighted_steps(&device);
    let inputs =
        Tensor::<TestBackend, 3>::from_floats([[[2.0, 4.0], [1.0, 1.0], [0.0, 1.0]]], &device);

    let output = encode(&module, inputs);

    output
        .into_data()
        .assert_eq(&TensorData::from([[2.0, 5.0]]), false);
    assert_eq!(module.length(), 2);
}

#[test]
fn routes_batch_fields_by_schema() {
    let device = Default::default();
    let module = weighted_steps(&device);
    let batch = HashMap::from([
        (
            "history".to_string(),
            Tensor::<TestBackend, 3>::ones([4, 3, 2], &device),
        ),
        (
            "user_id".to_string(),
            Tensor::<TestBackend, 3>::zeros([4, 1, 1], &device),
        ),
    ]);

    let schema = module.schema().unwrap();
    let selected = schema.select(&batch).unwrap();
    assert_eq!(selected.len(), 1);

    let output = module.forward(selected[0].clone());

    assert_eq!(output.dims(), [4, module.length()]);
    output
        .into_data()
        .assert_eq(&TensorData::from([[3.5f32, 3.5]; 4]), false);
}

#[test]
fn missing_batch_field_is_reported() {
    let device = Default::default();
    let module = weighted_steps(&device);
    let batch: HashMap<String, Tensor<TestBackend, 3>> = HashMap::new();

    let result = module.schema().unwrap().select(&batch);

    assert_eq!(
        result.map(|tensors| tensors.len()),
        Err(InputsError::MissingField("history".into()))
    );
}

#[test]
fn meta_is_not_a_parameter() {
    let device = Default::default();
    let module = weighted_steps(&device);

    assert_eq!(module.num_params(), 3);
}
