//! Wire types and gRPC client stubs for the Datastore data plane
//! (`google.datastore.v1`) and admin plane (`google.datastore.admin.v1`).
//!
//! The generated code is committed under `src/gen/` so the crate builds
//! without a protoc toolchain.

pub mod google {
    pub mod datastore {
        pub mod v1 {
            include!("gen/google.datastore.v1.rs");
        }
        pub mod admin {
            pub mod v1 {
                include!("gen/google.datastore.admin.v1.rs");
            }
        }
    }
    pub mod longrunning {
        include!("gen/google.longrunning.rs");
    }
    pub mod rpc {
        include!("gen/google.rpc.rs");
    }
    pub mod r#type {
        include!("gen/google.type.rs");
    }
}

// Data-plane types are the common case; re-export them at the crate root.
pub use google::datastore::v1::*;

pub use google::datastore::admin::v1 as admin;
pub use google::longrunning::Operation;
pub use google::r#type::LatLng;
pub use google::rpc::Status as RpcStatus;
