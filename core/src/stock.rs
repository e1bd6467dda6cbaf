//! stock.rs
//! Filter for the packages that ship with the game.
//!
//! Redirect servers only host custom content; every client already has these.
//! Consulted only when `CodecConfig::skip_stock_packages` is set.
use std::path::Path;

use crate::constants::PACKAGE_EXTENSIONS;

/// File names of the shipped packages, lower-case, sorted for binary search.
pub const STOCK_PACKAGES: &[&str] = &[
    "20credits.utx", "22chartex.utx", "22patch.usx", "22patchmesh.ukx", "25tex.utx",
    "2k4menus.utx", "abusementparksnd.uax", "amb_animals.uax", "amb_constructions.uax",
    "amb_constructionstwo.uax", "amb_destruction.uax", "amb_destruction2.uax",
    "amb_vehicles.uax", "amb_weather.uax", "amb_weather01.uax", "amb_weather02.uax",
    "amboutside.uax", "architecture_t.utx", "architecture_t2.utx", "architecture_t3.utx",
    "artillery.uax", "asylum_sm.usx", "asylum_t.utx", "baksanvalley_t.utx",
    "baksanvalleysm.usx", "cellexample.utx", "characters_tex.utx", "civilvehicles_sm.usx",
    "civilvehicles_smt.utx", "core.u", "crash_t.utx", "danzig_t.utx", "danzig_t2.utx",
    "danzig_t3.utx", "debugobjects.usx", "departedstatics.usx", "departedtextures.utx",
    "detailsm.usx", "detailsmt.utx", "detailtextures_t.utx", "dreamtex.utx", "editor.u",
    "effects_tex.utx", "effects_tex_steampunk.utx", "effectssm.usx", "engine.u",
    "entry.rom", "fallenheros2_t.utx", "fallenherossm.usx", "filthscross_sm.usx",
    "filthscross_t.utx", "fire.u", "foundry_anim.ukx", "foundry_sm.usx", "foundry_t.utx",
    "freakcircus_sm_one.usx", "freakcircus_sm_two.usx", "freakcircus_snd_two.uax",
    "freakcircus_t_one.utx", "freakcircus_t_two.utx", "frightscript.u",
    "frightyard2_sm.usx", "frightyard2_t.utx", "frightyard_skm.ukx", "frightyard_sm.usx",
    "frightyard_snd.uax", "frightyard_t.utx", "furnituresm.usx", "furnituresmt.utx",
    "g15lcd.utx", "g15lcdfonts.utx", "gameplay.u", "gear_anm.ukx", "gear_tex.utx",
    "gkstaticmeshes.usx", "gktextures.utx", "goodkarma.u", "gui2k4.u", "hedgehog_t.utx",
    "hedgehogsm.usx", "hellride_sm.usx", "hellride_snd.uax", "hellride_t.utx",
    "hemispheres_smt.utx", "hemispheres_smt2.utx", "hemispheressm.usx",
    "hemispheressm2.usx", "hillbillyhorror_anim.ukx", "hillbillyhorror_sm.usx",
    "hillbillyhorror_t.utx", "hillbillyhorrorsnd.uax", "icebreaker_sm.usx",
    "icebreaker_t.utx", "ijcfonts.utx", "ijcweaponpackstaticsw2.usx", "industrysm.usx",
    "industrysm2.usx", "industrysmt.utx", "industrysmt2.utx", "inf_player.uax",
    "inf_weapons.uax", "inf_weapons_foley.uax", "inf_weapons_foley2.uax",
    "inf_weapons_foley_3rd.uax", "inf_weaponstwo.uax", "interfaceart2_tex.utx",
    "interfaceart_tex.utx", "interfacecontent.utx", "ipdrv.u", "kessel_t.utx",
    "kesselsm.usx", "kf-abusementpark.rom", "kf-aperture.rom", "kf-bedlam.rom",
    "kf-biohazard.rom", "kf-bioticslab.rom", "kf-clandestine.rom", "kf-crash.rom",
    "kf-departed.rom", "kf-evilsantaslair.rom", "kf-farm.rom", "kf-filthscross.rom",
    "kf-forgotten.rom", "kf-foundry.rom", "kf-frightyard.rom", "kf-hell.rom",
    "kf-hellride.rom", "kf-hillbillyhorror.rom", "kf-hospitalhorrors.rom",
    "kf-icebreaker.rom", "kf-icecave.rom", "kf-manor.rom", "kf-menu.rom", "kf-moonbase.rom",
    "kf-mountainpass.rom", "kf-offices.rom", "kf-sirensbelch.rom", "kf-steamland.rom",
    "kf-stronghold.rom", "kf-suburbia.rom", "kf-thrillschills.rom", "kf-transit.rom",
    "kf-waterworks.rom", "kf-westlondon.rom", "kf-wyre.rom", "kf_9mmsnd.uax",
    "kf_aa12snd.uax", "kf_ak47snd.uax", "kf_axesnd.uax", "kf_basebloat.uax",
    "kf_basebloat_circus.uax", "kf_basebloat_halloween.uax", "kf_basebloat_xmas.uax",
    "kf_baseclot.uax", "kf_baseclot_circus.uax", "kf_baseclot_halloween.uax",
    "kf_baseclot_xmas.uax", "kf_basecrawler.uax", "kf_basecrawler_circus.uax",
    "kf_basecrawler_halloween.uax", "kf_basecrawler_xmas.uax", "kf_basefleshpound.uax",
    "kf_basefleshpound_circus.uax", "kf_basefleshpound_halloween.uax",
    "kf_basefleshpound_xmas.uax", "kf_basegorefast.uax", "kf_basegorefast_circus.uax",
    "kf_basegorefast_halloween.uax", "kf_basegorefast_xmas.uax", "kf_basehusk.uax",
    "kf_basehusk_circus.uax", "kf_basehusk_halloween.uax", "kf_basehusk_xmas.uax",
    "kf_basepatriarch.uax", "kf_basepatriarch_circus.uax", "kf_basepatriarch_halloween.uax",
    "kf_basepatriarch_xmas.uax", "kf_basepatriarchtwo.uax", "kf_basescrake.uax",
    "kf_basescrake_circus.uax", "kf_basescrake_halloween.uax", "kf_basescrake_xmas.uax",
    "kf_basesiren.uax", "kf_basesiren_circus.uax", "kf_basesiren_halloween.uax",
    "kf_basesiren_xmas.uax", "kf_basestalker.uax", "kf_basestalker_circus.uax",
    "kf_basestalker_halloween.uax", "kf_basestalker_xmas.uax", "kf_bimpactsnd.uax",
    "kf_bullpupsnd.uax", "kf_chainsawsnd.uax", "kf_chainsawsnd_xmas.uax",
    "kf_claymoresnd.uax", "kf_darvoice.uax", "kf_dlc.utx", "kf_doublesgsnd.uax",
    "kf_dwarfaxesnd.uax", "kf_enemiesfinalsnd.uax", "kf_enemiesfinalsnd_circus.uax",
    "kf_enemiesfinalsnd_halloween.uax", "kf_enemiesfinalsnd_xmas.uax",
    "kf_enemyglobalsnd.uax", "kf_enemyglobalsndtwo.uax", "kf_enginetest.usx",
    "kf_envambientsnd.uax", "kf_envambientsnd2.uax", "kf_femalevoiceone.uax",
    "kf_flamethrowersnd.uax", "kf_fnfalsnd.uax", "kf_foundrysnd.uax", "kf_freaks2_trip.ukx",
    "kf_freaks2_trip_circus.ukx", "kf_freaks2_trip_halloween.ukx",
    "kf_freaks2_trip_xmas.ukx", "kf_freaks_trip.ukx", "kf_freaks_trip_circus.ukx",
    "kf_freaks_trip_halloween.ukx", "kf_freaks_trip_xmas.ukx", "kf_fx_char_sm.usx",
    "kf_fx_char_t.utx", "kf_fx_trip_t.utx", "kf_fy_blowerthrowersnd.uax",
    "kf_fy_sealsquealsnd.uax", "kf_fy_seekersixsnd.uax", "kf_fy_zedv2snd.uax",
    "kf_generic_sm.usx", "kf_generic_t.utx", "kf_gibbs_trip.ukx", "kf_gore_trip_sm.usx",
    "kf_gore_trip_sm_circus.usx", "kf_gore_trip_sm_halloween.usx",
    "kf_gore_trip_sm_two.usx", "kf_gore_trip_sm_xmas.usx", "kf_gore_trip_t_two.utx",
    "kf_grenadesnd.uax", "kf_handcannonsnd.uax", "kf_huskgunsnd.uax", "kf_icetunnel_sm.usx",
    "kf_icetunnel_t.utx", "kf_ijc_halloween_weapons.utx", "kf_ijc_halloween_weapons2.utx",
    "kf_ijc_halloween_weapons2_3rd.utx", "kf_ijc_halloween_weapons_3rd.utx",
    "kf_ijc_halloween_weps.usx", "kf_ijc_halloween_weps2.usx", "kf_ijc_halloween_weps3.ukx",
    "kf_ijc_halloween_weps_2.ukx", "kf_ijc_halloweensnd.uax", "kf_ijc_hud.utx",
    "kf_ijc_summer_weapons.utx", "kf_ijc_summer_weapons_3rd.utx", "kf_ijc_summer_weps.usx",
    "kf_ijc_summer_weps1.ukx", "kf_indooramb1.uax", "kf_interfaceart_tex.utx",
    "kf_interfacesnd.uax", "kf_inventorysnd.uax", "kf_jumpsnd.uax", "kf_katanasnd.uax",
    "kf_knifesnd.uax", "kf_krisssnd.uax", "kf_ksgsnd.uax", "kf_lawsnd.uax",
    "kf_m14ebrsnd.uax", "kf_m32snd.uax", "kf_m4riflesnd.uax", "kf_m4shotgunsnd.uax",
    "kf_m79snd.uax", "kf_m7a3snd.uax", "kf_m99snd.uax", "kf_mac10mpanims.ukx",
    "kf_mac10mpsnd.uax", "kf_mac10mptex.utx", "kf_machetesnd.uax", "kf_malevoiceone.uax",
    "kf_malevoicetwo.uax", "kf_medicgrenadesnd.uax", "kf_menusnd.uax", "kf_mk23snd.uax",
    "kf_mkb42snd.uax", "kf_mp5snd.uax", "kf_mp7snd.uax", "kf_mumblevoice.uax",
    "kf_nailshotgun.uax", "kf_outdooramb1.uax", "kf_pickups2_trip.usx",
    "kf_pickups3_trip.usx", "kf_pickups4_trip.usx", "kf_pickups5_trip.usx",
    "kf_pickups6_trip.usx", "kf_pickups_trip.usx", "kf_pickupscamo_trip.usx",
    "kf_pickupsgold_trip.usx", "kf_pipesnd.uax", "kf_playerglobalsnd.uax",
    "kf_playerm1voc.uax", "kf_pumpsgsnd.uax", "kf_rachelc_anim.ukx", "kf_rachelc_mat.utx",
    "kf_revolversnd.uax", "kf_riflesnd.uax", "kf_ringmaster_trip.ukx", "kf_robotdance.ukx",
    "kf_rs_thompsonsnd.uax", "kf_scarsnd.uax", "kf_shotgundragonsbreathsnd.uax",
    "kf_sirensbelch_sm.usx", "kf_sirensbelch_t.utx", "kf_soldier11_trip_t.utx",
    "kf_soldier12_trip_t.utx", "kf_soldier13_trip_t.utx", "kf_soldier2_trip_t.utx",
    "kf_soldier3_trip_t.utx", "kf_soldier4_trip_t.utx", "kf_soldier5_trip_t.utx",
    "kf_soldier6_trip_t.utx", "kf_soldier_trip.ukx", "kf_soldier_trip_t.utx",
    "kf_soldiermagmaneon_trip_t.utx", "kf_solider10_trip_t.utx", "kf_solider7_trip_t.utx",
    "kf_solider8_trip_t.utx", "kf_solider9_trip_t.utx", "kf_sp_longmusketsnd.uax",
    "kf_sp_orcasnd.uax", "kf_sp_thompsonsnd.uax", "kf_sp_zedthrowersnd.uax",
    "kf_specimens_trip_circus_t.utx", "kf_specimens_trip_halloween_t.utx",
    "kf_specimens_trip_t.utx", "kf_specimens_trip_t_two.utx",
    "kf_specimens_trip_xmas_t.utx", "kf_specimens_trip_xmas_t_two.utx",
    "kf_swansong_sm.usx", "kf_swansong_snd.uax", "kf_swansong_tex.utx", "kf_trader.uax",
    "kf_transit_dialog_snd.uax", "kf_weapons2_trip.ukx", "kf_weapons2_trip_t.utx",
    "kf_weapons3_trip_t.utx", "kf_weapons3rd2_ijc.ukx", "kf_weapons3rd2_trip.ukx",
    "kf_weapons3rd2_trip_t.utx", "kf_weapons3rd3_ijc.ukx", "kf_weapons3rd3_trip.ukx",
    "kf_weapons3rd3_trip_t.utx", "kf_weapons3rd4_trip.ukx", "kf_weapons3rd4_trip_t.utx",
    "kf_weapons3rd5_trip.ukx", "kf_weapons3rd5_trip_t.utx", "kf_weapons3rd6_trip.ukx",
    "kf_weapons3rd6_trip_t.utx", "kf_weapons3rd_camo_trip_t.utx",
    "kf_weapons3rd_gold_t.utx", "kf_weapons3rd_ijc.ukx", "kf_weapons3rd_trip.ukx",
    "kf_weapons3rd_trip_t.utx", "kf_weapons4_trip_t.utx", "kf_weapons5_scopes_trip_t.utx",
    "kf_weapons5_trip_t.utx", "kf_weapons6_trip_t.utx", "kf_weapons7_trip_t.utx",
    "kf_weapons8_trip_t.utx", "kf_weapons9_trip_t.utx", "kf_weapons_camo_trip_t.utx",
    "kf_weapons_gold_t.utx", "kf_weapons_neon_trip_t.utx", "kf_weapons_trip.ukx",
    "kf_weapons_trip_t.utx", "kf_wep_benelli.ukx", "kf_wep_claymore.ukx",
    "kf_wep_dual_mk23.ukx", "kf_wep_dualrevolver.ukx", "kf_wep_dwarf_axe.ukx",
    "kf_wep_fal_acog.ukx", "kf_wep_huskgun.ukx", "kf_wep_kriss.ukx",
    "kf_wep_ksg_shotgun.ukx", "kf_wep_m4.ukx", "kf_wep_m4m203.ukx", "kf_wep_m7a3.ukx",
    "kf_wep_m99_sniper.ukx", "kf_wep_medicnade.ukx", "kf_wep_mk23.ukx", "kf_wep_mkb42.ukx",
    "kf_wep_mp5.ukx", "kf_wep_revolver.ukx", "kf_wep_trenchgun.ukx", "kf_wep_vlad9000.ukx",
    "kf_wep_zedgun.ukx", "kf_wp3rdcamo_trip.ukx", "kf_wp3rdgold_trip.ukx", "kf_xbowsnd.uax",
    "kf_zedgunsnd.uax", "kfambientsound.uax", "kfboss.ukx", "kfchar.u",
    "kfcharactermodels.ukx", "kfcharacters.utx", "kfcharactersb.ukx", "kffonts.utx",
    "kfgui.u", "kfgui.utx", "kfinterfacecontent.utx", "kfintro.rom", "kfkillmenow.utx",
    "kflevelpreviews.utx", "kfmapendtextures.utx", "kfmapobjects.ukx", "kfmaterials.utx",
    "kfmod.u", "kfmutators.u", "kfmuzzleflashes.usx", "kfo-frightyard.rom",
    "kfo-steamland.rom", "kfo-transit.rom", "kfpatch2.utx", "kfpawndamagesound.uax",
    "kfplayersound.uax", "kfportal_sm.usx", "kfportal_snd.uax", "kfportal_t.utx",
    "kfportraits.utx", "kfsoldiers.ukx", "kfstorygame.u", "kfstorygame_tex.utx",
    "kfstoryui.u", "kfthumbs.utx", "kfurbanskin.utx", "kfvehiclemodels.ukx",
    "kfweaponmodels.ukx", "kfweaponsound.uax", "kfx.utx", "kfzed_fx_t.utx",
    "killingfloor2hud.utx", "killingfloorhud.utx", "killingfloorhud_halloween.utx",
    "killingfloorhud_summer.utx", "killingfloorhud_xmas.utx", "killingfloorlabstatics.usx",
    "killingfloorlabtextures.utx", "killingfloormanorstatics.usx",
    "killingfloormanortextures.utx", "killingfloorofficetextures.utx",
    "killingfloorstatics.usx", "killingfloortextures.utx", "killingfloorweapons.utx",
    "konigsplatz_t.utx", "konigsplatzsm.usx", "krasnyi_cubemaps.utx",
    "krasnyioktyabr_t.utx", "krasnyioktyabr_t2.utx", "krasnyism.usx", "krasnyism2.usx",
    "landscape_t.utx", "landscapesm.usx", "landscapesmt.utx", "levelspecificsm.usx",
    "levelspecificsm2.usx", "levelspecificsmt.utx", "levelspecificsmt2.utx",
    "menubackground.utx", "menustatics.usx", "militaryaxissmt.utx", "miscsounds.uax",
    "moonbase_sm.usx", "moonbase_sm_two.usx", "moonbase_t.utx", "moonbase_t_two.utx",
    "mountainpass_sm.usx", "mountainpass_t.utx", "mrsfoster_dlc_1stp.utx",
    "mrsfoster_dlc_3rdp.utx", "mrsfoster_dlc_gore_sm.usx",
    "mrsfoster_steampunk_dlc_1stp.utx", "mrsfoster_steampunk_dlc_3rdp.utx",
    "mrsfoster_steampunk_dlc_gore_sm.usx", "newpatchsm.usx", "nointro.rom",
    "objectivemode_t.utx", "officestatics.usx", "old2k4.u", "patch2anims.ukx",
    "patchsounds.uax", "patchstatics.usx", "patchtex.utx", "pier_anim.ukx", "pier_sm.usx",
    "pier_t.utx", "pitomnik_t.utx", "placeholder_t.utx", "potato_s.usx", "potato_t.utx",
    "projectilesounds.uax", "props_objectivemode.usx", "religioussm.usx",
    "religioussmt.utx", "ringmaster_lockheart_t.utx", "roeffects.u", "roengine.u",
    "rofonts.utx", "rofonts_rus.utx", "rofontstwo.utx", "rointerface.u",
    "rointerfaceart.utx", "romenusounds.uax", "rsdlc_1stp.utx", "rsdlc_3rdp.utx",
    "ruralsm.usx", "ruralsmt.utx", "scopeshaders.utx", "sideshowscript.u",
    "specialeffects.utx", "specialeffectssm.usx", "steamland_snd.uax", "stronghold_sm.usx",
    "stronghold_t.utx", "summerboardwalkdialogue.uax", "unrealed.u", "unrealgame.u",
    "utv2004c.u", "utv2004s.u", "uweb.u", "vegetationsm.usx", "vegetationsm_two.usx",
    "vegetationsmt.utx", "vegetationsmt_two.utx", "vehicle_engines.uax",
    "vehicle_weapons.uax", "waterworks_sm.usx", "waterworks_t.utx", "weapons1st_tex.utx",
    "woodbreakfx.uax", "workshop_sm.usx", "workshop_t.utx", "wyrestatics.usx",
    "wyretex.utx", "xadmin.u", "xgame.u", "xinterface.u", "xvoting.u", "xwebadmin.u",
    "yahct_anim.ukx", "zed_fx_sm.usx", "zed_pieces.usx",
];

/// True when the file extension is exactly one of the game's package extensions.
///
/// Case-sensitive: `Map.ROM` is not a package.
pub fn is_package_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| PACKAGE_EXTENSIONS.contains(&ext))
}

/// True when the file name (case-insensitively) is a shipped package.
pub fn is_stock_package(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    STOCK_PACKAGES.binary_search(&name.to_ascii_lowercase().as_str()).is_ok()
}
