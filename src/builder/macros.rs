//! Macros for declaring automata from a literal transition table.

/// Build a complete automaton from a literal definition.
///
/// Expands to a [`DfaBuilder`](crate::builder::DfaBuilder) chain that
/// requires every transition to be defined, and evaluates to
/// `Result<Dfa, BuildError>`. The `final` list is optional.
///
/// # Example
///
/// ```
/// use dfakit::dfa;
///
/// let ends_in_one = dfa! {
///     alphabet: "01",
///     states: 2,
///     initial: 0,
///     final: [1],
///     transitions: {
///         0: ['0' => 0, '1' => 1],
///         1: ['0' => 0, '1' => 1],
///     }
/// }
/// .unwrap();
///
/// assert_eq!(ends_in_one.accepts("101"), Ok(true));
/// ```
#[macro_export]
macro_rules! dfa {
    (
        alphabet: $alphabet:expr,
        states: $states:expr,
        initial: $initial:expr,
        $(final: [$($final:expr),* $(,)?],)?
        transitions: {
            $(
                $from:literal : [$($symbol:literal => $to:expr),* $(,)?]
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::builder::DfaBuilder::new()
            .alphabet(($alphabet).chars())
            .states($states)
            .initial($initial)
            $(.final_states([$($final),*]))?
            $($(.transition($from, $symbol, $to))*)*
            .require_complete()
            .build()
    };
}
