//! Business Error Catalog
//!
//! This module defines the closed set of business errors the application can
//! report. Every variant carries:
//! - An HTTP status returned to the client
//! - A globally unique numeric business code
//! - A log type deciding how much detail the server logs
//!
//! The table below records which block of business codes belongs to which
//! feature area. The ranges are a convention for maintainers picking the next
//! free code; only uniqueness of the exact value is checked, by
//! [`crate::registry`] at startup.
//!
//! # Business Code Ranges
//!
//! | Range      | Area          | Description                                |
//! |------------|---------------|--------------------------------------------|
//! | 5000-5099  | General       | Cross-cutting and infrastructure errors    |
//! | 5100-5149  | Organization  | Organization membership and limits         |
//! | 5150-5199  | Group         | User groups                                |
//! | 5200-5299  | Invitation    | Invitation links and codes                 |
//! | 5300-5399  | Application   | Applications and history snapshots         |
//! | 5500-5599  | Data Source   | Data source configuration and connections  |
//! | 5600-5699  | Login         | Sign-in, sessions and auth providers       |
//! | 5700-5799  | Asset         | Uploaded assets                            |
//! | 5800-5899  | Plugin        | Data source plugin execution               |
//! | 5900-5999  | Business      | Release state                              |
//! | 6000-6099  | Template      | Application templates                      |
//! | 6100-6199  | Query         | Query execution and library queries        |
//! | 6200-6250  | User          | User status                                |
//! | 6251-6300  | License       | Edition and deployment licensing           |
//! | 6301-6350  | Folder        | Folders                                    |
//! | 6351-6400  | Material      | Materials                                  |
//!
//! # Example
//!
//! ```rust
//! use bizcode_common::errors::catalog::BizError;
//!
//! let error = BizError::DuplicateKey;
//! let def = error.definition();
//!
//! assert_eq!(def.http_status, 409);
//! assert_eq!(def.biz_code, 5004);
//! assert!(error.is_verbose());
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much detail to log when a business error occurs.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLogType {
    /// One terse line with the code and message.
    #[default]
    Simple,
    /// Full diagnostic detail, including context.
    Verbose,
}

impl ErrorLogType {
    /// Returns the lowercase name used in logs and JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for ErrorLogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The fixed attribute record attached to one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorDefinition {
    /// Symbolic identifier (e.g. "DUPLICATE_KEY")
    pub name: &'static str,
    /// HTTP status returned to the client
    pub http_status: u16,
    /// Business code, unique across the catalog
    pub biz_code: u32,
    /// Logging verbosity
    pub log_type: ErrorLogType,
}

impl ErrorDefinition {
    /// Creates a definition logged with [`ErrorLogType::Simple`].
    #[must_use]
    pub const fn new(name: &'static str, http_status: u16, biz_code: u32) -> Self {
        Self {
            name,
            http_status,
            biz_code,
            log_type: ErrorLogType::Simple,
        }
    }

    /// Marks the definition as [`ErrorLogType::Verbose`].
    #[must_use]
    pub const fn verbose(self) -> Self {
        Self {
            log_type: ErrorLogType::Verbose,
            ..self
        }
    }

    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        matches!(self.log_type, ErrorLogType::Verbose)
    }
}

/// Business error enumeration covering every failure the application reports.
///
/// Each variant maps to exactly one [`ErrorDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BizError {
    // =========================================================================
    // General Errors (5000-5099)
    // =========================================================================
    /// Unexpected internal failure
    InternalServerError,
    /// Caller is not authorized for the operation
    NotAuthorized,
    /// A request parameter failed validation
    InvalidParameter,
    /// Operation is not supported
    UnsupportedOperation,
    /// Unique key constraint violated
    DuplicateKey,
    /// Requested resource does not exist
    NoResourceFound,
    /// Redis call timed out
    InfraRedisTimeout,
    /// MongoDB call timed out
    InfraMongoTimeout,
    /// Permission change is not allowed
    InvalidPermissionOperation,
    /// Request rejected by rate limiting
    RequestThrottled,
    /// Server has not finished starting
    ServerNotReady,
    /// Client must follow a redirect
    Redirect,

    // -- Organization (5100-5149) --
    /// Organization id is invalid
    InvalidOrgId,
    /// Switching the current organization failed
    SwitchCurrentOrgError,
    /// The last admin cannot leave the organization
    LastAdminCannotLeaveOrg,
    /// User belongs to too many organizations
    ExceedMaxUserOrgCount,
    /// Organization member limit reached
    ExceedMaxOrgMemberCount,
    /// No valid organization found for the user
    UnableToFindValidOrg,
    /// Developer seat limit reached
    ExceedMaxDeveloperCount,
    /// Enterprise organization has been deleted
    OrgDeletedForEnterpriseMode,

    // -- Group (5150-5199) --
    /// Group id is invalid
    InvalidGroupId,
    /// Members cannot remove themselves
    CannotRemoveMyself,
    /// Leaving this group is not allowed
    CannotLeaveGroup,
    /// Group limit reached
    ExceedMaxGroupCount,
    /// System groups cannot be deleted
    CannotDeleteSystemGroup,
    /// Developer role required to create resources
    NeedDevToCreateResource,

    // -- Invitation (5200-5299) --
    /// Invitation code is invalid
    InvalidInvitationCode,
    /// Inviting user no longer exists
    InviterNotFound,
    /// User is already a member
    AlreadyInOrganization,
    /// Target organization has been deleted
    InvitedOrgDeleted,
    /// Target application has been deleted
    InvitedApplicationDeleted,
    /// Invited user must sign in first
    InvitedUserNotLogin,

    // -- Application (5300-5399) --
    /// Query does not exist
    QueryNotFound,
    /// Application does not exist
    ApplicationNotFound,
    /// Application permission id is invalid
    IllegalApplicationPermissionId,
    /// Application limit reached
    ExceedMaxAppCount,
    /// Caller may not view the application
    NoPermissionToView,
    /// Loading history snapshots failed
    FetchHistorySnapshotFailure,
    /// Counting history snapshots failed
    FetchHistorySnapshotCountFailure,
    /// History snapshot is invalid
    InvalidHistorySnapshot,
    /// Caller may not request access to the application
    NoPermissionToRequestApp,

    // -- Data Source (5500-5599) --
    /// Data source does not exist
    DatasourceNotFound,
    /// Data source configuration is invalid
    InvalidDatasourceConfiguration,
    /// Data source still has queries attached
    DatasourceDeleteFailDueToRemainingQueries,
    /// Plugin could not open a connection
    PluginCreateConnectionFailed,
    /// Data source plugin id is missing
    DatasourcePluginIdNotGiven,
    /// Data source limit reached
    ExceedMaxDatasourceCount,
    /// Data source configuration type is invalid
    InvalidDatasourceConfigType,
    /// Data source type is wrong
    DatasourceTypeError,
    /// Database name already in use
    DuplicateDatabaseName,
    /// Closing the data source failed
    DatasourceCloseFailed,
    /// Data source and application belong to different organizations
    DatasourceAndAppOrgNotMatch,
    /// Certificate content is empty
    CertificateIsEmpty,

    // -- Login (5600-5699) --
    /// User is not signed in
    UserNotSignedIn,
    /// Fetching OIDC provider information failed
    FailToGetOidcInfo,
    /// Login source is not supported
    LogInSourceNotSupported,
    /// Too many login attempts
    TooManyRequests,
    /// One-time password is invalid
    InvalidOtp,
    /// Login id is already taken
    UserLoginIdExist,
    /// Password is invalid
    InvalidPassword,
    /// Third-party account is already bound
    AlreadyBind,
    /// A third-party connection must be bound first
    NeedBindThirdPartyConnection,
    /// CAS login failed
    CasLoginError,
    /// DingTalk login failed
    DingTalkLoginError,
    /// Enterprise organization not found
    CannotFindEnterpriseOrg,
    /// Authentication failed
    AuthError,
    /// Refreshing authentication failed
    AuthRefreshError,
    /// Login session has expired
    LoginExpired,
    /// Disabling this auth configuration is forbidden
    DisableAuthConfigForbidden,
    /// User does not exist
    UserNotExist,
    /// No JWT present on the request
    JwtNotFind,
    /// Identifier does not exist
    IdNotExist,
    /// Auth configuration already added
    DuplicateAuthConfigAddition,

    // -- Asset (5700-5799) --
    /// Uploaded payload is too large
    PayloadTooLarge,

    // -- Plugin (5800-5899) --
    /// Plugin execution timed out
    PluginExecutionTimeout,
    /// Data source type is unknown
    InvalidDatasourceType,
    /// Plugin execution timed out without a reported duration
    PluginExecutionTimeoutWithoutTime,

    // -- Business (5900-5999) --
    /// Application has not been released
    NotRelease,

    // -- Template (6000-6099) --
    /// Template does not exist
    TemplateNotExist,
    /// Template is malformed
    TemplateNotCorrect,

    // -- Query (6100-6199) --
    /// Query request exceeds the size limit
    ExceedQueryRequestSize,
    /// Query response exceeds the size limit
    ExceedQueryResponseSize,
    /// Query execution failed
    QueryExecutionError,
    /// Library query belongs to another organization
    LibraryQueryAndOrgNotMatch,
    /// Library query does not exist
    LibraryQueryNotFound,

    // -- User (6200-6250) --
    /// User status is invalid
    InvalidUserStatus,
    /// User has been banned
    UserBanned,

    // -- License (6251-6300) --
    /// Deployment is not allowed in air-gapped environments
    CantDeployInAirGappedEnv,
    /// Feature is unavailable in the current edition
    CurrentEditionNotSupportForThisFeature,

    // -- Folder (6301-6350) --
    /// Caller may not modify the folder
    FolderOperateNoPermission,
    /// Folder does not exist
    FolderNotExist,
    /// Folder name already in use
    FolderNameConflict,
    /// Folder permission id is invalid
    IllegalFolderPermissionId,

    // -- Material (6351-6400) --
    /// Material request is invalid
    InvalidMaterialRequest,
}

impl BizError {
    /// Returns the attribute record for this variant.
    #[must_use]
    pub const fn definition(&self) -> ErrorDefinition {
        match self {
            // General (5000-5099)
            Self::InternalServerError => {
                ErrorDefinition::new("INTERNAL_SERVER_ERROR", 500, 5000).verbose()
            }
            Self::NotAuthorized => ErrorDefinition::new("NOT_AUTHORIZED", 500, 5001),
            Self::InvalidParameter => ErrorDefinition::new("INVALID_PARAMETER", 500, 5002),
            Self::UnsupportedOperation => ErrorDefinition::new("UNSUPPORTED_OPERATION", 400, 5003),
            Self::DuplicateKey => ErrorDefinition::new("DUPLICATE_KEY", 409, 5004).verbose(),
            Self::NoResourceFound => ErrorDefinition::new("NO_RESOURCE_FOUND", 500, 5005),
            Self::InfraRedisTimeout => ErrorDefinition::new("INFRA_REDIS_TIMEOUT", 500, 5006),
            Self::InfraMongoTimeout => ErrorDefinition::new("INFRA_MONGO_TIMEOUT", 500, 5007),
            Self::InvalidPermissionOperation => {
                ErrorDefinition::new("INVALID_PERMISSION_OPERATION", 500, 5008)
            }
            Self::RequestThrottled => ErrorDefinition::new("REQUEST_THROTTLED", 429, 5009),
            Self::ServerNotReady => ErrorDefinition::new("SERVER_NOT_READY", 503, 5010),
            Self::Redirect => ErrorDefinition::new("REDIRECT", 302, 5011),

            // Organization (5100-5149)
            Self::InvalidOrgId => ErrorDefinition::new("INVALID_ORG_ID", 500, 5100),
            Self::SwitchCurrentOrgError => {
                ErrorDefinition::new("SWITCH_CURRENT_ORG_ERROR", 500, 5101)
            }
            Self::LastAdminCannotLeaveOrg => {
                ErrorDefinition::new("LAST_ADMIN_CANNOT_LEAVE_ORG", 500, 5102)
            }
            Self::ExceedMaxUserOrgCount => {
                ErrorDefinition::new("EXCEED_MAX_USER_ORG_COUNT", 500, 5103)
            }
            Self::ExceedMaxOrgMemberCount => {
                ErrorDefinition::new("EXCEED_MAX_ORG_MEMBER_COUNT", 500, 5104)
            }
            Self::UnableToFindValidOrg => {
                ErrorDefinition::new("UNABLE_TO_FIND_VALID_ORG", 500, 5105)
            }
            Self::ExceedMaxDeveloperCount => {
                ErrorDefinition::new("EXCEED_MAX_DEVELOPER_COUNT", 500, 5106)
            }
            Self::OrgDeletedForEnterpriseMode => {
                ErrorDefinition::new("ORG_DELETED_FOR_ENTERPRISE_MODE", 500, 5107)
            }

            // Group (5150-5199)
            Self::InvalidGroupId => ErrorDefinition::new("INVALID_GROUP_ID", 500, 5150),
            Self::CannotRemoveMyself => ErrorDefinition::new("CANNOT_REMOVE_MYSELF", 500, 5151),
            Self::CannotLeaveGroup => ErrorDefinition::new("CANNOT_LEAVE_GROUP", 500, 5152),
            Self::ExceedMaxGroupCount => ErrorDefinition::new("EXCEED_MAX_GROUP_COUNT", 500, 5153),
            Self::CannotDeleteSystemGroup => {
                ErrorDefinition::new("CANNOT_DELETE_SYSTEM_GROUP", 500, 5154)
            }
            Self::NeedDevToCreateResource => {
                ErrorDefinition::new("NEED_DEV_TO_CREATE_RESOURCE", 500, 5155)
            }

            // Invitation (5200-5299)
            Self::InvalidInvitationCode => {
                ErrorDefinition::new("INVALID_INVITATION_CODE", 400, 5200)
            }
            Self::InviterNotFound => ErrorDefinition::new("INVITER_NOT_FOUND", 404, 5201),
            Self::AlreadyInOrganization => {
                ErrorDefinition::new("ALREADY_IN_ORGANIZATION", 400, 5202)
            }
            Self::InvitedOrgDeleted => ErrorDefinition::new("INVITED_ORG_DELETED", 500, 5203),
            Self::InvitedApplicationDeleted => {
                ErrorDefinition::new("INVITED_APPLICATION_DELETED", 500, 5204)
            }
            Self::InvitedUserNotLogin => ErrorDefinition::new("INVITED_USER_NOT_LOGIN", 403, 5205),

            // Application (5300-5399)
            Self::QueryNotFound => ErrorDefinition::new("QUERY_NOT_FOUND", 500, 5300),
            Self::ApplicationNotFound => ErrorDefinition::new("APPLICATION_NOT_FOUND", 500, 5301),
            Self::IllegalApplicationPermissionId => {
                ErrorDefinition::new("ILLEGAL_APPLICATION_PERMISSION_ID", 500, 5302)
            }
            Self::ExceedMaxAppCount => ErrorDefinition::new("EXCEED_MAX_APP_COUNT", 500, 5303),
            Self::NoPermissionToView => ErrorDefinition::new("NO_PERMISSION_TO_VIEW", 403, 5304),
            Self::FetchHistorySnapshotFailure => {
                ErrorDefinition::new("FETCH_HISTORY_SNAPSHOT_FAILURE", 500, 5305)
            }
            Self::FetchHistorySnapshotCountFailure => {
                ErrorDefinition::new("FETCH_HISTORY_SNAPSHOT_COUNT_FAILURE", 500, 5306)
            }
            Self::InvalidHistorySnapshot => {
                ErrorDefinition::new("INVALID_HISTORY_SNAPSHOT", 500, 5307)
            }
            Self::NoPermissionToRequestApp => {
                ErrorDefinition::new("NO_PERMISSION_TO_REQUEST_APP", 403, 5308)
            }

            // Data Source (5500-5599)
            Self::DatasourceNotFound => ErrorDefinition::new("DATASOURCE_NOT_FOUND", 500, 5500),
            Self::InvalidDatasourceConfiguration => {
                ErrorDefinition::new("INVALID_DATASOURCE_CONFIGURATION", 400, 5501).verbose()
            }
            Self::DatasourceDeleteFailDueToRemainingQueries => {
                ErrorDefinition::new("DATASOURCE_DELETE_FAIL_DUE_TO_REMAINING_QUERIES", 500, 5502)
            }
            Self::PluginCreateConnectionFailed => {
                ErrorDefinition::new("PLUGIN_CREATE_CONNECTION_FAILED", 500, 5503).verbose()
            }
            Self::DatasourcePluginIdNotGiven => {
                ErrorDefinition::new("DATASOURCE_PLUGIN_ID_NOT_GIVEN", 400, 5504)
            }
            Self::ExceedMaxDatasourceCount => {
                ErrorDefinition::new("EXCEED_MAX_DATASOURCE_COUNT", 500, 5505)
            }
            Self::InvalidDatasourceConfigType => {
                ErrorDefinition::new("INVALID_DATASOURCE_CONFIG_TYPE", 500, 5506).verbose()
            }
            Self::DatasourceTypeError => {
                ErrorDefinition::new("DATASOURCE_TYPE_ERROR", 500, 5507).verbose()
            }
            Self::DuplicateDatabaseName => {
                ErrorDefinition::new("DUPLICATE_DATABASE_NAME", 500, 5508)
            }
            Self::DatasourceCloseFailed => {
                ErrorDefinition::new("DATASOURCE_CLOSE_FAILED", 500, 5509).verbose()
            }
            Self::DatasourceAndAppOrgNotMatch => {
                ErrorDefinition::new("DATASOURCE_AND_APP_ORG_NOT_MATCH", 500, 5510)
            }
            Self::CertificateIsEmpty => ErrorDefinition::new("CERTIFICATE_IS_EMPTY", 400, 5511),

            // Login (5600-5699)
            Self::UserNotSignedIn => ErrorDefinition::new("USER_NOT_SIGNED_IN", 401, 5600),
            Self::FailToGetOidcInfo => {
                ErrorDefinition::new("FAIL_TO_GET_OIDC_INFO", 500, 5601).verbose()
            }
            Self::LogInSourceNotSupported => {
                ErrorDefinition::new("LOG_IN_SOURCE_NOT_SUPPORTED", 403, 5602)
            }
            Self::TooManyRequests => ErrorDefinition::new("TOO_MANY_REQUESTS", 429, 5603),
            Self::InvalidOtp => ErrorDefinition::new("INVALID_OTP", 403, 5604),
            Self::UserLoginIdExist => ErrorDefinition::new("USER_LOGIN_ID_EXIST", 403, 5607),
            Self::InvalidPassword => ErrorDefinition::new("INVALID_PASSWORD", 403, 5608),
            Self::AlreadyBind => ErrorDefinition::new("ALREADY_BIND", 403, 5609),
            Self::NeedBindThirdPartyConnection => {
                ErrorDefinition::new("NEED_BIND_THIRD_PARTY_CONNECTION", 400, 5610)
            }
            Self::CasLoginError => ErrorDefinition::new("CAS_LOGIN_ERROR", 400, 5611),
            Self::DingTalkLoginError => ErrorDefinition::new("DING_TALK_LOGIN_ERROR", 400, 5612),
            Self::CannotFindEnterpriseOrg => {
                ErrorDefinition::new("CANNOT_FIND_ENTERPRISE_ORG", 500, 5613)
            }
            Self::AuthError => ErrorDefinition::new("AUTH_ERROR", 400, 5614),
            Self::AuthRefreshError => ErrorDefinition::new("AUTH_REFRESH_ERROR", 400, 5615),
            Self::LoginExpired => ErrorDefinition::new("LOGIN_EXPIRED", 401, 5616),
            Self::DisableAuthConfigForbidden => {
                ErrorDefinition::new("DISABLE_AUTH_CONFIG_FORBIDDEN", 403, 5617)
            }
            Self::UserNotExist => ErrorDefinition::new("USER_NOT_EXIST", 400, 5618),
            Self::JwtNotFind => ErrorDefinition::new("JWT_NOT_FIND", 400, 5619),
            Self::IdNotExist => ErrorDefinition::new("ID_NOT_EXIST", 500, 5620),
            Self::DuplicateAuthConfigAddition => {
                ErrorDefinition::new("DUPLICATE_AUTH_CONFIG_ADDITION", 400, 5621)
            }

            // Asset (5700-5799)
            Self::PayloadTooLarge => ErrorDefinition::new("PAYLOAD_TOO_LARGE", 413, 5700),

            // Plugin (5800-5899)
            Self::PluginExecutionTimeout => {
                ErrorDefinition::new("PLUGIN_EXECUTION_TIMEOUT", 504, 5800)
            }
            Self::InvalidDatasourceType => {
                ErrorDefinition::new("INVALID_DATASOURCE_TYPE", 500, 5801)
            }
            Self::PluginExecutionTimeoutWithoutTime => {
                ErrorDefinition::new("PLUGIN_EXECUTION_TIMEOUT_WITHOUT_TIME", 504, 5802).verbose()
            }

            // Business (5900-5999)
            Self::NotRelease => ErrorDefinition::new("NOT_RELEASE", 423, 5901),

            // Template (6000-6099)
            Self::TemplateNotExist => ErrorDefinition::new("TEMPLATE_NOT_EXIST", 500, 6000),
            Self::TemplateNotCorrect => ErrorDefinition::new("TEMPLATE_NOT_CORRECT", 500, 6001),

            // Query (6100-6199)
            Self::ExceedQueryRequestSize => {
                ErrorDefinition::new("EXCEED_QUERY_REQUEST_SIZE", 500, 6100)
            }
            Self::ExceedQueryResponseSize => {
                ErrorDefinition::new("EXCEED_QUERY_RESPONSE_SIZE", 500, 6101)
            }
            Self::QueryExecutionError => ErrorDefinition::new("QUERY_EXECUTION_ERROR", 500, 6102),
            Self::LibraryQueryAndOrgNotMatch => {
                ErrorDefinition::new("LIBRARY_QUERY_AND_ORG_NOT_MATCH", 400, 6103)
            }
            Self::LibraryQueryNotFound => {
                ErrorDefinition::new("LIBRARY_QUERY_NOT_FOUND", 400, 6104)
            }

            // User (6200-6250)
            Self::InvalidUserStatus => ErrorDefinition::new("INVALID_USER_STATUS", 500, 6200),
            Self::UserBanned => ErrorDefinition::new("USER_BANNED", 500, 6201),

            // License (6251-6300)
            Self::CantDeployInAirGappedEnv => {
                ErrorDefinition::new("CANT_DEPLOY_IN_AIR_GAPPED_ENV", 400, 6251)
            }
            Self::CurrentEditionNotSupportForThisFeature => {
                ErrorDefinition::new("CURRENT_EDITION_NOT_SUPPORT_FOR_THIS_FEATURE", 400, 6252)
            }

            // Folder (6301-6350)
            Self::FolderOperateNoPermission => {
                ErrorDefinition::new("FOLDER_OPERATE_NO_PERMISSION", 500, 6301)
            }
            Self::FolderNotExist => ErrorDefinition::new("FOLDER_NOT_EXIST", 500, 6302),
            Self::FolderNameConflict => ErrorDefinition::new("FOLDER_NAME_CONFLICT", 500, 6303),
            Self::IllegalFolderPermissionId => {
                ErrorDefinition::new("ILLEGAL_FOLDER_PERMISSION_ID", 500, 6304)
            }

            // Material (6351-6400)
            Self::InvalidMaterialRequest => {
                ErrorDefinition::new("INVALID_MATERIAL_REQUEST", 500, 6351)
            }
        }
    }

    /// Returns the symbolic identifier (e.g. "DUPLICATE_KEY").
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.definition().name
    }

    /// Returns the HTTP status sent to the client.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.definition().http_status
    }

    /// Returns the unique business code.
    #[must_use]
    pub const fn biz_code(&self) -> u32 {
        self.definition().biz_code
    }

    #[must_use]
    pub const fn log_type(&self) -> ErrorLogType {
        self.definition().log_type
    }

    /// Returns true if occurrences should be logged with full detail.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.definition().is_verbose()
    }

    /// Looks a variant up by its symbolic identifier, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|error| error.name().eq_ignore_ascii_case(name))
    }

    /// Returns all variants in declaration order.
    #[must_use]
    pub const fn all() -> &'static [BizError] {
        &[
            // General
            Self::InternalServerError,
            Self::NotAuthorized,
            Self::InvalidParameter,
            Self::UnsupportedOperation,
            Self::DuplicateKey,
            Self::NoResourceFound,
            Self::InfraRedisTimeout,
            Self::InfraMongoTimeout,
            Self::InvalidPermissionOperation,
            Self::RequestThrottled,
            Self::ServerNotReady,
            Self::Redirect,

            // Organization
            Self::InvalidOrgId,
            Self::SwitchCurrentOrgError,
            Self::LastAdminCannotLeaveOrg,
            Self::ExceedMaxUserOrgCount,
            Self::ExceedMaxOrgMemberCount,
            Self::UnableToFindValidOrg,
            Self::ExceedMaxDeveloperCount,
            Self::OrgDeletedForEnterpriseMode,

            // Group
            Self::InvalidGroupId,
            Self::CannotRemoveMyself,
            Self::CannotLeaveGroup,
            Self::ExceedMaxGroupCount,
            Self::CannotDeleteSystemGroup,
            Self::NeedDevToCreateResource,

            // Invitation
            Self::InvalidInvitationCode,
            Self::InviterNotFound,
            Self::AlreadyInOrganization,
            Self::InvitedOrgDeleted,
            Self::InvitedApplicationDeleted,
            Self::InvitedUserNotLogin,

            // Application
            Self::QueryNotFound,
            Self::ApplicationNotFound,
            Self::IllegalApplicationPermissionId,
            Self::ExceedMaxAppCount,
            Self::NoPermissionToView,
            Self::FetchHistorySnapshotFailure,
            Self::FetchHistorySnapshotCountFailure,
            Self::InvalidHistorySnapshot,
            Self::NoPermissionToRequestApp,

            // Data Source
            Self::DatasourceNotFound,
            Self::InvalidDatasourceConfiguration,
            Self::DatasourceDeleteFailDueToRemainingQueries,
            Self::PluginCreateConnectionFailed,
            Self::DatasourcePluginIdNotGiven,
            Self::ExceedMaxDatasourceCount,
            Self::InvalidDatasourceConfigType,
            Self::DatasourceTypeError,
            Self::DuplicateDatabaseName,
            Self::DatasourceCloseFailed,
            Self::DatasourceAndAppOrgNotMatch,
            Self::CertificateIsEmpty,

            // Login
            Self::UserNotSignedIn,
            Self::FailToGetOidcInfo,
            Self::LogInSourceNotSupported,
            Self::TooManyRequests,
            Self::InvalidOtp,
            Self::UserLoginIdExist,
            Self::InvalidPassword,
            Self::AlreadyBind,
            Self::NeedBindThirdPartyConnection,
            Self::CasLoginError,
            Self::DingTalkLoginError,
            Self::CannotFindEnterpriseOrg,
            Self::AuthError,
            Self::AuthRefreshError,
            Self::LoginExpired,
            Self::DisableAuthConfigForbidden,
            Self::UserNotExist,
            Self::JwtNotFind,
            Self::IdNotExist,
            Self::DuplicateAuthConfigAddition,

            // Asset
            Self::PayloadTooLarge,

            // Plugin
            Self::PluginExecutionTimeout,
            Self::InvalidDatasourceType,
            Self::PluginExecutionTimeoutWithoutTime,

            // Business
            Self::NotRelease,

            // Template
            Self::TemplateNotExist,
            Self::TemplateNotCorrect,

            // Query
            Self::ExceedQueryRequestSize,
            Self::ExceedQueryResponseSize,
            Self::QueryExecutionError,
            Self::LibraryQueryAndOrgNotMatch,
            Self::LibraryQueryNotFound,

            // User
            Self::InvalidUserStatus,
            Self::UserBanned,

            // License
            Self::CantDeployInAirGappedEnv,
            Self::CurrentEditionNotSupportForThisFeature,

            // Folder
            Self::FolderOperateNoPermission,
            Self::FolderNotExist,
            Self::FolderNameConflict,
            Self::IllegalFolderPermissionId,

            // Material
            Self::InvalidMaterialRequest,
        ]
    }
}

impl fmt::Display for BizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.biz_code())
    }
}
