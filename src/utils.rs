#[allow(unused)]
use crate::prelude::*;

/// Array of the given shape filled from `Uniform(-1, 1)` using `rng`.
#[macro_export]
macro_rules! rand_array {
    ($rng:expr; $($x:expr),*) => {
        {
            use $crate::prelude::RandomExt;
            $crate::prelude::Array::random_using(
                ($($x,)*),
                $crate::prelude::Uniform::new(-1.0, 1.0),
                &mut *$rng,
            )
        }
    };
}

/// Declarative [`Network`](crate::models::Network) construction.
///
/// ```
/// use ffnet::prelude::*;
///
/// let net = ffnet::ffnet!(input 2, seed 7; dense 5 => Activation::Relu, dense 1 => Activation::Sigmoid)?;
/// assert_eq!(net.output_size(), 1);
/// # Ok::<(), ffnet::error::NNError>(())
/// ```
#[macro_export]
macro_rules! ffnet {
    (input $i:expr, seed $s:expr; $(dense $x:expr => $a:expr),+ $(,)?) => {
        $crate::models::Network::seeded(
            $i,
            &[$($crate::models::LayerSpec::new($x, $a)),+],
            $s,
        )
    };
    (input $i:expr; $(dense $x:expr => $a:expr),+ $(,)?) => {
        $crate::models::Network::from_entropy(
            $i,
            &[$($crate::models::LayerSpec::new($x, $a)),+],
        )
    };
}
