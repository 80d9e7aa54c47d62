//! A registry that maps numeric types to their [NumericOps] bundles at runtime.
//!
//! Generic code that only knows the element type `T` can obtain its operations with
//! [OperationRegistry::resolve]. The result is a [Registered] bundle that caches the
//! operations behind an [Arc], so that hot loops never consult the registry again.
//!
//! ```
//! use algebrix::{registry::OperationRegistry, tensors::Matrix};
//!
//! let ops = OperationRegistry::global().resolve::<i64>().unwrap();
//! let m = Matrix::from_linear(vec![2, 0, 0, 3], 2, 2, ops).unwrap();
//! assert_eq!(m.determinant(), Ok(6));
//! ```
use std::{
    any::{Any, TypeId},
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    sync::{Arc, PoisonError, RwLock},
};

use ahash::{HashMap, HashMapExt};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::{
    domains::{
        float::{F32, F64},
        integer::{
            WrappingInt, I128, I16, I32, I64, I8, ISIZE, U128, U16, U32, U64, U8, USIZE, Z,
        },
        rational::Q,
        NumericOps,
    },
    error::NumericError,
};

static GLOBAL_REGISTRY: Lazy<OperationRegistry> = Lazy::new(OperationRegistry::new);

/// An object-safe view of a [NumericOps] bundle with element type `T`.
///
/// Every [NumericOps] implements this trait, so any bundle can be stored in a
/// [Registered] wrapper.
pub trait DynNumericOps<T>: Debug + Send + Sync {
    fn type_name(&self) -> &'static str;
    fn display_name(&self) -> String;
    fn zero(&self) -> T;
    fn one(&self) -> T;
    fn nth(&self, n: i64) -> T;
    fn add(&self, a: &T, b: &T) -> T;
    fn sub(&self, a: &T, b: &T) -> T;
    fn mul(&self, a: &T, b: &T) -> T;
    fn div(&self, a: &T, b: &T) -> Result<T, NumericError>;
    fn neg(&self, a: &T) -> Result<T, NumericError>;
    fn pow(&self, b: &T, e: i64) -> Result<T, NumericError>;
    fn cmp(&self, a: &T, b: &T) -> Ordering;
    fn is_field(&self) -> bool;
    fn is_integral_domain(&self) -> bool;
    fn is_signed(&self) -> bool;
    fn abs(&self, a: &T) -> Result<T, NumericError>;
    fn sqrt(&self, a: &T) -> Result<T, NumericError>;
    fn sin(&self, a: &T) -> Result<T, NumericError>;
    fn cos(&self, a: &T) -> Result<T, NumericError>;
    fn acos(&self, a: &T) -> Result<T, NumericError>;
    fn is_zero(&self, a: &T) -> bool;
    fn is_one(&self, a: &T) -> bool;
    fn is_negligible(&self, a: &T) -> bool;
    fn abs_diff(&self, a: &T, b: &T) -> T;
    fn add_assign(&self, a: &mut T, b: &T);
    fn sub_assign(&self, a: &mut T, b: &T);
    fn mul_assign(&self, a: &mut T, b: &T);
    fn add_mul_assign(&self, a: &mut T, b: &T, c: &T);
    fn sub_mul_assign(&self, a: &mut T, b: &T, c: &T);
}

impl<R: NumericOps> DynNumericOps<R::Element> for R {
    fn type_name(&self) -> &'static str {
        NumericOps::type_name(self)
    }

    fn display_name(&self) -> String {
        self.to_string()
    }

    fn zero(&self) -> R::Element {
        NumericOps::zero(self)
    }

    fn one(&self) -> R::Element {
        NumericOps::one(self)
    }

    fn nth(&self, n: i64) -> R::Element {
        NumericOps::nth(self, n)
    }

    fn add(&self, a: &R::Element, b: &R::Element) -> R::Element {
        NumericOps::add(self, a, b)
    }

    fn sub(&self, a: &R::Element, b: &R::Element) -> R::Element {
        NumericOps::sub(self, a, b)
    }

    fn mul(&self, a: &R::Element, b: &R::Element) -> R::Element {
        NumericOps::mul(self, a, b)
    }

    fn div(&self, a: &R::Element, b: &R::Element) -> Result<R::Element, NumericError> {
        NumericOps::div(self, a, b)
    }

    fn neg(&self, a: &R::Element) -> Result<R::Element, NumericError> {
        NumericOps::neg(self, a)
    }

    fn pow(&self, b: &R::Element, e: i64) -> Result<R::Element, NumericError> {
        NumericOps::pow(self, b, e)
    }

    fn cmp(&self, a: &R::Element, b: &R::Element) -> Ordering {
        NumericOps::cmp(self, a, b)
    }

    fn is_field(&self) -> bool {
        NumericOps::is_field(self)
    }

    fn is_integral_domain(&self) -> bool {
        NumericOps::is_integral_domain(self)
    }

    fn is_signed(&self) -> bool {
        NumericOps::is_signed(self)
    }

    fn abs(&self, a: &R::Element) -> Result<R::Element, NumericError> {
        NumericOps::abs(self, a)
    }

    fn sqrt(&self, a: &R::Element) -> Result<R::Element, NumericError> {
        NumericOps::sqrt(self, a)
    }

    fn sin(&self, a: &R::Element) -> Result<R::Element, NumericError> {
        NumericOps::sin(self, a)
    }

    fn cos(&self, a: &R::Element) -> Result<R::Element, NumericError> {
        NumericOps::cos(self, a)
    }

    fn acos(&self, a: &R::Element) -> Result<R::Element, NumericError> {
        NumericOps::acos(self, a)
    }

    fn is_zero(&self, a: &R::Element) -> bool {
        NumericOps::is_zero(self, a)
    }

    fn is_one(&self, a: &R::Element) -> bool {
        NumericOps::is_one(self, a)
    }

    fn is_negligible(&self, a: &R::Element) -> bool {
        NumericOps::is_negligible(self, a)
    }

    fn abs_diff(&self, a: &R::Element, b: &R::Element) -> R::Element {
        NumericOps::abs_diff(self, a, b)
    }

    fn add_assign(&self, a: &mut R::Element, b: &R::Element) {
        NumericOps::add_assign(self, a, b)
    }

    fn sub_assign(&self, a: &mut R::Element, b: &R::Element) {
        NumericOps::sub_assign(self, a, b)
    }

    fn mul_assign(&self, a: &mut R::Element, b: &R::Element) {
        NumericOps::mul_assign(self, a, b)
    }

    fn add_mul_assign(&self, a: &mut R::Element, b: &R::Element, c: &R::Element) {
        NumericOps::add_mul_assign(self, a, b, c)
    }

    fn sub_mul_assign(&self, a: &mut R::Element, b: &R::Element, c: &R::Element) {
        NumericOps::sub_mul_assign(self, a, b, c)
    }
}

/// A type-erased bundle of numeric operations on `T`, as stored in an [OperationRegistry].
///
/// Cloning is cheap, since the bundle is shared.
pub struct Registered<T> {
    ops: Arc<dyn DynNumericOps<T>>,
}

impl<T> Registered<T> {
    pub fn new<R: NumericOps<Element = T> + 'static>(ops: R) -> Self {
        Registered { ops: Arc::new(ops) }
    }
}

impl<T: 'static> Registered<T> {
    /// Resolve the operations for `T` from the global registry.
    pub fn resolve() -> Result<Self, NumericError> {
        OperationRegistry::global().resolve::<T>()
    }
}

impl<T> Clone for Registered<T> {
    fn clone(&self) -> Self {
        Registered {
            ops: self.ops.clone(),
        }
    }
}

impl<T> Debug for Registered<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Registered").field(&self.ops).finish()
    }
}

impl<T> Display for Registered<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ops.display_name())
    }
}

impl<T: Clone + Debug> NumericOps for Registered<T> {
    type Element = T;

    fn type_name(&self) -> &'static str {
        self.ops.type_name()
    }

    fn zero(&self) -> T {
        self.ops.zero()
    }

    fn one(&self) -> T {
        self.ops.one()
    }

    fn nth(&self, n: i64) -> T {
        self.ops.nth(n)
    }

    fn add(&self, a: &T, b: &T) -> T {
        self.ops.add(a, b)
    }

    fn sub(&self, a: &T, b: &T) -> T {
        self.ops.sub(a, b)
    }

    fn mul(&self, a: &T, b: &T) -> T {
        self.ops.mul(a, b)
    }

    fn div(&self, a: &T, b: &T) -> Result<T, NumericError> {
        self.ops.div(a, b)
    }

    fn neg(&self, a: &T) -> Result<T, NumericError> {
        self.ops.neg(a)
    }

    fn pow(&self, b: &T, e: i64) -> Result<T, NumericError> {
        self.ops.pow(b, e)
    }

    fn cmp(&self, a: &T, b: &T) -> Ordering {
        DynNumericOps::cmp(&*self.ops, a, b)
    }

    fn is_field(&self) -> bool {
        self.ops.is_field()
    }

    fn is_integral_domain(&self) -> bool {
        self.ops.is_integral_domain()
    }

    fn is_signed(&self) -> bool {
        self.ops.is_signed()
    }

    fn abs(&self, a: &T) -> Result<T, NumericError> {
        self.ops.abs(a)
    }

    fn sqrt(&self, a: &T) -> Result<T, NumericError> {
        self.ops.sqrt(a)
    }

    fn sin(&self, a: &T) -> Result<T, NumericError> {
        self.ops.sin(a)
    }

    fn cos(&self, a: &T) -> Result<T, NumericError> {
        self.ops.cos(a)
    }

    fn acos(&self, a: &T) -> Result<T, NumericError> {
        self.ops.acos(a)
    }

    fn is_zero(&self, a: &T) -> bool {
        self.ops.is_zero(a)
    }

    fn is_one(&self, a: &T) -> bool {
        self.ops.is_one(a)
    }

    fn is_negligible(&self, a: &T) -> bool {
        self.ops.is_negligible(a)
    }

    fn abs_diff(&self, a: &T, b: &T) -> T {
        self.ops.abs_diff(a, b)
    }

    fn add_assign(&self, a: &mut T, b: &T) {
        self.ops.add_assign(a, b)
    }

    fn sub_assign(&self, a: &mut T, b: &T) {
        self.ops.sub_assign(a, b)
    }

    fn mul_assign(&self, a: &mut T, b: &T) {
        self.ops.mul_assign(a, b)
    }

    fn add_mul_assign(&self, a: &mut T, b: &T, c: &T) {
        self.ops.add_mul_assign(a, b, c)
    }

    fn sub_mul_assign(&self, a: &mut T, b: &T, c: &T) {
        self.ops.sub_mul_assign(a, b, c)
    }
}

struct Entry {
    type_name: &'static str,
    builtin: bool,
    /// A [Registered] bundle for the type with this entry's key.
    ops: Box<dyn Any + Send + Sync>,
}

/// A thread-safe table from numeric types to their operations.
///
/// Each type has at most one entry, keyed on its [TypeId], so that types with the same
/// runtime representation (such as `i32` and `Wrapping<i32>`) never share a bundle.
/// Entries can be added or replaced, but never removed.
pub struct OperationRegistry {
    entries: RwLock<HashMap<TypeId, Entry>>,
}

impl OperationRegistry {
    /// Create a registry without any entries.
    pub fn empty() -> Self {
        OperationRegistry {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with the operations for all primitive integers and floats,
    /// `Wrapping<i32>`, `Wrapping<i64>` and the arbitrary-precision [rug::Integer]
    /// and [rug::Rational].
    pub fn new() -> Self {
        let r = Self::empty();
        r.insert(I8, true);
        r.insert(I16, true);
        r.insert(I32, true);
        r.insert(I64, true);
        r.insert(I128, true);
        r.insert(ISIZE, true);
        r.insert(U8, true);
        r.insert(U16, true);
        r.insert(U32, true);
        r.insert(U64, true);
        r.insert(U128, true);
        r.insert(USIZE, true);
        r.insert(WrappingInt::<i32>::new(), true);
        r.insert(WrappingInt::<i64>::new(), true);
        r.insert(F32, true);
        r.insert(F64, true);
        r.insert(Z, true);
        r.insert(Q, true);
        r
    }

    /// The process-wide registry, created with the built-in entries on first use.
    pub fn global() -> &'static OperationRegistry {
        &GLOBAL_REGISTRY
    }

    /// Register `ops` for its element type, replacing any previous entry.
    pub fn register<R>(&self, ops: R)
    where
        R: NumericOps + 'static,
        R::Element: 'static,
    {
        self.insert(ops, false);
    }

    fn insert<R>(&self, ops: R, builtin: bool)
    where
        R: NumericOps + 'static,
        R::Element: 'static,
    {
        let type_name = std::any::type_name::<R::Element>();
        let entry = Entry {
            type_name,
            builtin,
            ops: Box::new(Registered::new(ops)),
        };

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(old) = entries.insert(TypeId::of::<R::Element>(), entry) {
            if old.builtin {
                debug!("Replaced built-in numeric operations for {}", type_name);
            }
        }
    }

    /// Get the operations for `T`.
    pub fn resolve<T: 'static>(&self) -> Result<Registered<T>, NumericError> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&TypeId::of::<T>())
            .and_then(|e| e.ops.downcast_ref::<Registered<T>>())
            .cloned()
            .ok_or(NumericError::UnsupportedType(std::any::type_name::<T>()))
    }

    pub fn is_registered<T: 'static>(&self) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(&TypeId::of::<T>())
    }

    /// Returns `true` if the entry for `T` is the one installed by [OperationRegistry::new].
    pub fn is_builtin<T: 'static>(&self) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&TypeId::of::<T>()).is_some_and(|e| e.builtin)
    }

    /// The names of all registered types, sorted.
    pub fn registered_types(&self) -> Vec<&'static str> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<_> = entries.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for OperationRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("types", &self.registered_types())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use std::num::Wrapping;

    use super::OperationRegistry;
    use crate::{
        domains::{float::FloatField, NumericOps},
        error::NumericError,
    };

    #[test]
    fn builtins() {
        let r = OperationRegistry::new();
        assert_eq!(r.len(), 18);
        assert!(r.is_builtin::<u16>());
        assert!(r.is_registered::<rug::Rational>());

        let ops = r.resolve::<i32>().unwrap();
        assert_eq!(ops.add(&2, &3), 5);
        assert_eq!(ops.type_name(), "i32");
        assert_eq!(ops.to_string(), "i32");
    }

    #[test]
    fn empty() {
        let r = OperationRegistry::empty();
        assert!(r.is_empty());
        assert_eq!(
            r.resolve::<f64>().unwrap_err(),
            NumericError::UnsupportedType("f64")
        );
    }

    #[test]
    fn replace_builtin() {
        let r = OperationRegistry::new();
        r.register(FloatField::with_tolerance(0.5f64));
        assert!(!r.is_builtin::<f64>());
        assert!(r.resolve::<f64>().unwrap().is_negligible(&0.25));
        assert_eq!(r.len(), 18);
    }

    #[test]
    fn distinct_wrapping() {
        let r = OperationRegistry::new();
        let w = r.resolve::<Wrapping<i32>>().unwrap();
        assert_eq!(w.add(&Wrapping(i32::MAX), &Wrapping(1)), Wrapping(i32::MIN));
        assert!(!w.is_integral_domain());
        assert!(!r.resolve::<u32>().unwrap().is_signed());
        assert_ne!(r.resolve::<i32>().unwrap().type_name(), w.type_name());
    }
}
