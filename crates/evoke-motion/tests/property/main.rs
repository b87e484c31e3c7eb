mod motion_properties;
