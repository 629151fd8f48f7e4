use ::quickcheck::{Arbitrary, Gen};

use crate::map::Map;
use crate::set::Set;
use crate::stack::Stack;
use crate::vector::Vector;

impl<K, V> Arbitrary for Map<K, V> where K: Arbitrary + Ord, V: Arbitrary {
    fn arbitrary(g: &mut Gen) -> Map<K, V> {
        Vec::<(K, V)>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Map<K, V>>> {
        let entries: Vec<(K, V)> =
            self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Box::new(entries.shrink().map(|entries| entries.into_iter().collect()))
    }
}

impl<T> Arbitrary for Set<T> where T: Arbitrary + Ord {
    fn arbitrary(g: &mut Gen) -> Set<T> {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Set<T>>> {
        let items: Vec<T> = self.iter().cloned().collect();
        Box::new(items.shrink().map(|items| items.into_iter().collect()))
    }
}

impl<T> Arbitrary for Vector<T> where T: Arbitrary {
    fn arbitrary(g: &mut Gen) -> Vector<T> {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Vector<T>>> {
        let values: Vec<T> = self.iter().cloned().collect();
        Box::new(values.shrink().map(|values| values.into_iter().collect()))
    }
}

impl<T> Arbitrary for Stack<T> where T: Arbitrary {
    fn arbitrary(g: &mut Gen) -> Stack<T> {
        Vec::<T>::arbitrary(g).into_iter().collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Stack<T>>> {
        let values: Vec<T> = self.clone().into_inner().into_iter().collect();
        Box::new(values.shrink().map(|values| values.into_iter().collect()))
    }
}
