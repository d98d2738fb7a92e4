pub mod svm;

pub use svm::SvmClassifier;
