//! The primitive species operation set.

/// The primitive operations of the species algebra.
///
/// Implementations interpret the same operation set over different
/// carriers: the cycle index series (counting under all permutations of
/// the label set) and the exponential generating function (counting
/// labeled structures only). Derived species are written once against
/// this trait and evaluated under either interpretation.
///
/// # Laws
///
/// - `add`/`mul` form a commutative semiring with identities `zero`/`one`
/// - `compose` is associative, has `singleton` as a left identity only,
///   and composing with `zero` yields `zero`
/// - `differentiate` satisfies the product rule over `mul`
pub trait Species: Clone {
    /// The empty species: no structures on any label set.
    fn zero() -> Self;

    /// The empty-set species: one structure on the empty label set,
    /// nothing elsewhere. The identity for `mul`.
    fn one() -> Self;

    /// The singleton species X: one structure on one label.
    fn singleton() -> Self;

    /// The species E of sets: exactly one structure on every label set.
    fn set() -> Self;

    /// The species C of cycles: cyclic orders on non-empty label sets.
    fn cycle() -> Self;

    /// Disjoint union of structures.
    fn add(&self, other: &Self) -> Self;

    /// Partitional product: split the label set in two, build one
    /// structure on each part.
    fn mul(&self, other: &Self) -> Self;

    /// The one-hole derivative F'.
    fn differentiate(&self) -> Self;

    /// Partitional composition F ∘ G: an F-structure on blocks, each block
    /// carrying a G-structure.
    ///
    /// # Panics
    ///
    /// Panics if `inner` has structures on the empty label set.
    fn compose(&self, inner: &Self) -> Self;

    /// Hadamard product F × G: pairs of an F-structure and a G-structure
    /// on the same label set, compatible under the same permutation.
    fn hadamard(&self, other: &Self) -> Self;

    /// Functor composition F □ G: F-structures built on the set of all
    /// G-structures.
    fn functor_compose(&self, inner: &Self) -> Self;

    /// Keeps only structures whose label-set size satisfies the predicate.
    fn of_size<P>(&self, predicate: P) -> Self
    where
        P: Fn(usize) -> bool + Send + Sync + 'static;

    /// Keeps only structures on label sets of exactly size n.
    fn of_size_exactly(&self, n: usize) -> Self {
        self.of_size(move |k| k == n)
    }
}
