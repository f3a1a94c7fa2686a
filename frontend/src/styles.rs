pub const PAGE: &str = "relative w-full min-h-screen overflow-hidden font-serif text-white bg-[#b30d0d] bg-gradient-to-b from-[#b30d0d] via-[#8B0000] to-[#5c0000]";
pub const CONTAINER: &str = "relative z-10 flex flex-col items-center justify-center w-full min-h-screen gap-6 py-8 overflow-hidden";

// Landing
pub const LANDING: &str = "relative z-10 flex flex-col w-full min-h-screen overflow-hidden";
pub const LANDING_CONTENT: &str = "flex-grow flex flex-col items-center justify-center w-full px-4 gap-8";
pub const HEADER_GROUP: &str = "z-10 flex flex-col items-center text-center animate-[fadeIn_0.5s_ease-out]";
pub const TEXT_TITLE: &str = "text-6xl sm:text-7xl font-black tracking-widest text-transparent bg-clip-text bg-gradient-to-b from-[#FFFACD] via-[#FFD700] to-[#B8860B] drop-shadow-xl mb-6";
pub const TEXT_SUBTITLE: &str = "text-[22px] font-bold tracking-widest text-[#F2C94C]/90 drop-shadow-md";
pub const TIER_LIST: &str = "flex flex-col items-center justify-center w-full max-w-4xl gap-[5px] px-4";
pub const TIER_BUTTON: &str = "flex items-center justify-center w-full min-w-[120px] max-w-[250px] h-[50px] px-4 rounded-full bg-[#D9230F] border-2 border-black shadow-[2px_2px_0px_#000] text-white text-[18px] font-black tracking-widest hover:translate-y-[1px] hover:shadow-none hover:bg-[#c11f0d] transition-all duration-200";
pub const FOOTER: &str = "w-full pb-6 text-center text-xs tracking-wider text-[#F2C94C]/50";

// Wheel page
pub const BACK_BUTTON_WRAPPER: &str = "fixed top-6 right-6 z-[60]";
pub const BUTTON_BACK: &str = "flex items-center justify-center w-[120px] h-[40px] px-3 rounded-full bg-[#D9230F] border-[3px] border-black shadow-[4px_4px_0px_#000] text-sm font-black tracking-widest text-white hover:shadow-none hover:translate-y-1 hover:bg-[#c11f0d] transition-all disabled:opacity-50 disabled:cursor-not-allowed disabled:hover:translate-y-0 disabled:hover:shadow-[4px_4px_0px_#000]";
pub const LEVEL_BADGE: &str = "flex items-center justify-center gap-2 w-[350px] h-[40px] px-[10px] rounded-full bg-[#D9230F] border-2 border-black shadow-[2px_2px_0px_#000] text-[22px] font-bold leading-none";
pub const WHEEL_WRAPPER: &str = "relative z-10 mt-10 transform scale-90 md:scale-100 transition-transform";
pub const WHEEL_POINTER: &str = "absolute top-[-30px] left-1/2 -translate-x-1/2 -translate-y-12 z-40 filter drop-shadow-xl pointer-events-none";
pub const WHEEL_CANVAS: &str = "rounded-full shadow-[0_0_50px_rgba(255,215,0,0.4)]";
pub const LOADING_TEXT: &str = "absolute inset-0 flex items-center justify-center text-xl font-bold tracking-widest text-[#F2C94C] animate-pulse";
pub const START_WRAPPER: &str = "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 z-40";
pub const BUTTON_START: &str = "min-w-[140px] h-[55px] px-4 rounded-full bg-gradient-to-b from-[#ff5e57] to-[#d63031] border-t border-white/30 shadow-[inset_0_2px_5px_rgba(255,255,255,0.4),0_8px_0_#8B0000] text-[26px] font-black italic tracking-wider text-white font-sans hover:-translate-y-1 active:translate-y-[6px] active:shadow-[inset_0_2px_5px_rgba(255,255,255,0.4),0_2px_0_#8B0000] transition-all duration-100 disabled:translate-y-[6px] disabled:cursor-wait disabled:brightness-90 disabled:shadow-[inset_0_2px_5px_rgba(255,255,255,0.4),0_2px_0_#8B0000]";

// Result modal
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-[9999] flex items-center justify-center bg-black/80 backdrop-blur-sm";
pub const MODAL_CARD: &str = "flex flex-col items-center justify-between w-[300px] h-[340px] py-5 rounded-[10px] border-[5px] border-[#b30d0d] bg-white shadow-2xl animate-[popIn_0.4s_ease-out_forwards]";
pub const MODAL_DIVIDER: &str = "w-4/5 h-px bg-[#989898] opacity-30";
pub const MODAL_HEADING: &str = "mb-2 text-lg font-bold tracking-widest text-[#b30d0d]";
pub const MODAL_PRIZE: &str = "px-2 text-3xl font-black leading-tight text-center text-[#b30d0d] break-words";
pub const BUTTON_CLOSE: &str = "w-[100px] h-[35px] rounded-full bg-[#9da3ae] hover:bg-[#8d939e] text-white font-bold tracking-widest transition-colors";
