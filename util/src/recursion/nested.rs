/// One layer of a rose tree: a leaf value, or a branch whose children have
/// already been processed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NestedFrame<A, X> {
    Leaf(A),
    Branch(Vec<X>),
}

mod impls {
    use crate::recursion::nested::NestedFrame;
    use recursion::{MappableFrame, PartiallyApplied};

    impl<A> MappableFrame for NestedFrame<A, PartiallyApplied> {
        type Frame<X> = NestedFrame<A, X>;

        #[inline]
        fn map_frame<X, Y>(input: Self::Frame<X>, f: impl FnMut(X) -> Y) -> Self::Frame<Y> {
            match input {
                NestedFrame::Leaf(a) => NestedFrame::Leaf(a),
                NestedFrame::Branch(xs) => NestedFrame::Branch(xs.into_iter().map(f).collect()),
            }
        }
    }
}
