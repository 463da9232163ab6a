use super::{Constructor, Fields};
use crate::error::Result;
use crate::ops::{DynamicOps, MapEntries};

impl<P> Fields<P> for () {
    type Values = ();

    fn decode_fields<O>(&self, _ops: &O, _entries: &MapEntries<'_, O::Value>) -> Result<()>
    where
        O: DynamicOps + ?Sized,
    {
        Ok(())
    }

    fn encode_fields<O>(
        &self,
        _ops: &O,
        _owner: &P,
        _out: &mut Vec<(O::Value, O::Value)>,
    ) -> Result<()>
    where
        O: DynamicOps + ?Sized,
    {
        Ok(())
    }
}

impl<K, R> Constructor<()> for K
where
    K: Fn() -> R,
{
    type Output = R;

    fn construct(&self, (): ()) -> R {
        self()
    }
}

macro_rules! impl_tuple {
    ($($T:ident $t:ident),*) => {
        impl<P, $($T: Fields<P>),*> Fields<P> for ($($T,)*) {
            type Values = ($($T::Values,)*);

            fn decode_fields<O>(&self, ops: &O, entries: &MapEntries<'_, O::Value>) -> Result<Self::Values>
            where
                O: DynamicOps + ?Sized,
            {
                let ($($t,)*) = self;
                Ok(($($t.decode_fields(ops, entries)?,)*))
            }

            fn encode_fields<O>(
                &self,
                ops: &O,
                owner: &P,
                out: &mut Vec<(O::Value, O::Value)>,
            ) -> Result<()>
            where
                O: DynamicOps + ?Sized,
            {
                let ($($t,)*) = self;
                $( $t.encode_fields(ops, owner, out)?; )*
                Ok(())
            }
        }

        impl<K, R, $($T),*> Constructor<($($T,)*)> for K
        where
            K: Fn($($T),*) -> R,
        {
            type Output = R;

            fn construct(&self, ($($t,)*): ($($T,)*)) -> R {
                self($($t),*)
            }
        }
    };
}

impl_tuple!(T1 t1);
impl_tuple!(T1 t1, T2 t2);
impl_tuple!(T1 t1, T2 t2, T3 t3);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11, T12 t12);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11, T12 t12, T13 t13);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11, T12 t12, T13 t13, T14 t14);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11, T12 t12, T13 t13, T14 t14, T15 t15);
impl_tuple!(T1 t1, T2 t2, T3 t3, T4 t4, T5 t5, T6 t6, T7 t7, T8 t8, T9 t9, T10 t10, T11 t11, T12 t12, T13 t13, T14 t14, T15 t15, T16 t16);
