mod random;
mod solution;
mod trail;
mod word;

pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests;
pub use solution::Assignment;
pub(crate) use trail::Trail;
pub(crate) use word::collect_vocabulary;
pub use word::Word;
pub use word::WordId;

pub(crate) type HashMap<K, V> = fnv::FnvHashMap<K, V>;
pub(crate) type HashSet<K> = fnv::FnvHashSet<K>;
