use burn::tensor::Tensor;
use burn::tensor::backend::Backend;

use crate::Inputs;

/// Input module for time series.
///
/// A time series input reads a tensor of sequential observations and produces the tensor
/// consumed by the rest of the model. The ranks of both tensors are chosen by the
/// implementor through `D_IN` and `D_OUT`.
///
/// The contract cannot be instantiated on its own: only a type providing
/// [forward](TimeseriesInputs::forward) satisfies it. An input module without a forward pass
/// is rejected wherever a time series input is expected.
///
/// ```compile_fail,E0277
/// use burn::backend::NdArray;
/// use burn::module::Module;
/// use burn::tensor::backend::Backend;
/// use recsys_inputs::{Inputs, InputsMeta, TimeseriesInputs};
///
/// #[derive(Module, Clone, Debug)]
/// struct Unfinished {
///     meta: InputsMeta,
/// }
///
/// impl<B: Backend> Inputs<B> for Unfinished {
///     fn meta(&self) -> &InputsMeta {
///         &self.meta
///     }
/// }
///
/// fn expects_timeseries<M: TimeseriesInputs<NdArray, 3, 2>>() {}
///
/// fn main() {
///     expects_timeseries::<Unfinished>();
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Module, Clone, Debug)]
/// pub struct LastValue {
///     meta: InputsMeta,
/// }
///
/// impl<B: Backend> Inputs<B> for LastValue {
///     fn meta(&self) -> &InputsMeta {
///         &self.meta
///     }
/// }
///
/// impl<B: Backend> TimeseriesInputs<B, 2, 2> for LastValue {
///     fn forward(&self, inputs: Tensor<B, 2>) -> Tensor<B, 2> {
///         let [batch_size, seq_length] = inputs.dims();
///         inputs.slice([0..batch_size, seq_length - 1..seq_length])
///     }
/// }
/// ```
pub trait TimeseriesInputs<B: Backend, const D_IN: usize, const D_OUT: usize>: Inputs<B> {
    /// Applies the forward pass on the input tensor.
    fn forward(&self, inputs: Tensor<B, D_IN>) -> Tensor<B, D_OUT>;
}
