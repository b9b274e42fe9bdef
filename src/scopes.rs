use std::fmt;

/// Spotify authorization scopes.
///
/// No scopes are requested by default; pass the ones your application
/// needs to [`Spotify::authorization_url`](crate::Spotify::authorization_url).
/// See <https://developer.spotify.com/documentation/web-api/concepts/scopes>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Upload images to Spotify on the user's behalf.
    UgcImageUpload,
    /// Read access to a user's player state.
    UserReadPlaybackState,
    /// Write access to a user's playback state.
    UserModifyPlaybackState,
    /// Read access to a user's currently playing content.
    UserReadCurrentlyPlaying,
    /// Remote control playback of Spotify. Available to the Spotify iOS
    /// and Android SDKs.
    AppRemoteControl,
    /// Control playback of a Spotify track via the Web Playback SDK.
    /// Requires a Spotify Premium account.
    Streaming,
    /// Read access to a user's private playlists.
    PlaylistReadPrivate,
    /// Include collaborative playlists when requesting a user's playlists.
    PlaylistReadCollaborative,
    /// Write access to a user's private playlists.
    PlaylistModifyPrivate,
    /// Write access to a user's public playlists.
    PlaylistModifyPublic,
    /// Write/delete access to the list of artists and other users that
    /// the user follows.
    UserFollowModify,
    /// Read access to the list of artists and other users that the user
    /// follows.
    UserFollowRead,
    /// Read access to a user's playback position in a content.
    UserReadPlaybackPosition,
    /// Read access to a user's top artists and tracks.
    UserTopRead,
    /// Read access to a user's recently played tracks.
    UserReadRecentlyPlayed,
    /// Write/delete access to a user's "Your Music" library.
    UserLibraryModify,
    /// Read access to a user's library.
    UserLibraryRead,
    /// Read access to a user's email address.
    UserReadEmail,
    /// Read access to a user's subscription details (type of user account).
    UserReadPrivate,
    /// Link a partner user account to a Spotify user account.
    UserSoaLink,
    /// Unlink a partner user account from a Spotify account.
    UserSoaUnlink,
    /// Modify entitlements for linked users.
    UserManageEntitlements,
    /// Update partner information.
    UserManagePartner,
    /// Create new partners. Platform partners only.
    UserCreatePartner,
}

impl Scope {
    /// All known scopes.
    pub const ALL: [Scope; 24] = [
        Scope::UgcImageUpload,
        Scope::UserReadPlaybackState,
        Scope::UserModifyPlaybackState,
        Scope::UserReadCurrentlyPlaying,
        Scope::AppRemoteControl,
        Scope::Streaming,
        Scope::PlaylistReadPrivate,
        Scope::PlaylistReadCollaborative,
        Scope::PlaylistModifyPrivate,
        Scope::PlaylistModifyPublic,
        Scope::UserFollowModify,
        Scope::UserFollowRead,
        Scope::UserReadPlaybackPosition,
        Scope::UserTopRead,
        Scope::UserReadRecentlyPlayed,
        Scope::UserLibraryModify,
        Scope::UserLibraryRead,
        Scope::UserReadEmail,
        Scope::UserReadPrivate,
        Scope::UserSoaLink,
        Scope::UserSoaUnlink,
        Scope::UserManageEntitlements,
        Scope::UserManagePartner,
        Scope::UserCreatePartner,
    ];

    /// The wire value sent in the `scope` request parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Scope::UgcImageUpload => "ugc-image-upload",
            Scope::UserReadPlaybackState => "user-read-playback-state",
            Scope::UserModifyPlaybackState => "user-modify-playback-state",
            Scope::UserReadCurrentlyPlaying => "user-read-currently-playing",
            Scope::AppRemoteControl => "app-remote-control",
            Scope::Streaming => "streaming",
            Scope::PlaylistReadPrivate => "playlist-read-private",
            Scope::PlaylistReadCollaborative => "playlist-read-collaborative",
            Scope::PlaylistModifyPrivate => "playlist-modify-private",
            Scope::PlaylistModifyPublic => "playlist-modify-public",
            Scope::UserFollowModify => "user-follow-modify",
            Scope::UserFollowRead => "user-follow-read",
            Scope::UserReadPlaybackPosition => "user-read-playback-position",
            Scope::UserTopRead => "user-top-read",
            Scope::UserReadRecentlyPlayed => "user-read-recently-played",
            Scope::UserLibraryModify => "user-library-modify",
            Scope::UserLibraryRead => "user-library-read",
            Scope::UserReadEmail => "user-read-email",
            Scope::UserReadPrivate => "user-read-private",
            Scope::UserSoaLink => "user-soa-link",
            Scope::UserSoaUnlink => "user-soa-unlink",
            Scope::UserManageEntitlements => "user-manage-entitlements",
            Scope::UserManagePartner => "user-manage-partner",
            Scope::UserCreatePartner => "user-create-partner",
        }
    }

    /// Look up a scope by its wire value. Returns `None` for strings
    /// outside the known set.
    pub fn from_wire(value: &str) -> Option<Scope> {
        Scope::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
