use std::sync::Arc;

use crate::authorization::application::ports::incoming::use_cases::{
    CheckPermissionUseCase, CreateGroupUseCase, CreatePermissionUseCase, ManageMembershipUseCase,
};

#[derive(Clone)]
pub struct AuthorizationUseCases {
    pub create_group: Arc<dyn CreateGroupUseCase + Send + Sync>,
    pub create_permission: Arc<dyn CreatePermissionUseCase + Send + Sync>,
    pub membership: Arc<dyn ManageMembershipUseCase + Send + Sync>,
    pub check: Arc<dyn CheckPermissionUseCase + Send + Sync>,
}
